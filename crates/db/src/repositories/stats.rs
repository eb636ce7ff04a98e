//! Sales statistics over listings.
//!
//! Prices are summed in Rust rather than with `SUM()`, which returns
//! `numeric` for `bigint` columns on Postgres.

use realty_core::property;
use realty_core::stats::{AgencyStats, RealtorStats, SalesTally};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
    sea_query::SimpleExpr,
};

use crate::entities::{agencies, properties, realtors, sea_orm_active_enums::PropertyStatus};

/// Statistics repository.
#[derive(Debug, Clone)]
pub struct StatsRepository {
    db: DatabaseConnection,
}

impl StatsRepository {
    /// Creates a new stats repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stats over the listings a realtor owns; `None` for an unknown realtor.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn realtor_stats(&self, realtor_id: i32) -> Result<Option<RealtorStats>, DbErr> {
        let Some(realtor) = realtors::Entity::find_by_id(realtor_id).one(&self.db).await? else {
            return Ok(None);
        };

        let tally = self
            .tally(properties::Column::RealtorId.eq(realtor_id))
            .await?;

        Ok(Some(RealtorStats {
            realtor_id,
            full_name: realtor.full_name,
            tally,
        }))
    }

    /// Stats over an agency's listings; `None` for an unknown agency.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails.
    pub async fn agency_stats(&self, agency_id: i32) -> Result<Option<AgencyStats>, DbErr> {
        let Some(agency) = agencies::Entity::find_by_id(agency_id).one(&self.db).await? else {
            return Ok(None);
        };

        let total_realtors = realtors::Entity::find()
            .filter(realtors::Column::AgencyId.eq(agency_id))
            .count(&self.db)
            .await?;

        let tally = self
            .tally(properties::Column::AgencyId.eq(agency_id))
            .await?;

        Ok(Some(AgencyStats {
            agency_id,
            name: agency.name,
            total_realtors,
            tally,
        }))
    }

    async fn tally(&self, scope: SimpleExpr) -> Result<SalesTally, DbErr> {
        let rows: Vec<(PropertyStatus, i64)> = properties::Entity::find()
            .select_only()
            .column(properties::Column::Status)
            .column(properties::Column::Price)
            .filter(scope)
            .filter(
                properties::Column::Status.is_in([PropertyStatus::ForSale, PropertyStatus::Sold]),
            )
            .into_tuple()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(status, price)| (property::PropertyStatus::from(status), price))
            .collect())
    }
}
