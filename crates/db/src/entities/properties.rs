//! `SeaORM` Entity for properties table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::PropertyStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub address: String,
    #[sea_orm(column_type = "Double", nullable)]
    pub latitude: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub longitude: Option<f64>,
    pub status: PropertyStatus,
    pub agency_id: i32,
    pub realtor_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::agencies::Entity",
        from = "Column::AgencyId",
        to = "super::agencies::Column::Id"
    )]
    Agencies,
    #[sea_orm(
        belongs_to = "super::realtors::Entity",
        from = "Column::RealtorId",
        to = "super::realtors::Column::Id"
    )]
    Realtors,
    #[sea_orm(has_many = "super::property_history::Entity")]
    PropertyHistory,
}

impl Related<super::agencies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agencies.def()
    }
}

impl Related<super::realtors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Realtors.def()
    }
}

impl Related<super::property_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PropertyHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Snapshot of the fields a patch may change.
    #[must_use]
    pub fn state(&self) -> realty_core::property::PropertyState {
        realty_core::property::PropertyState {
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price,
            address: self.address.clone(),
            latitude: self.latitude,
            longitude: self.longitude,
            status: self.status.into(),
        }
    }
}
