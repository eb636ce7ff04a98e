//! `SeaORM` Entity for documents table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub filename: String,
    #[sea_orm(unique)]
    pub filepath: String,
    pub realtor_id: i32,
    pub agency_id: i32,
    pub property_id: Option<i32>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::agencies::Entity",
        from = "Column::AgencyId",
        to = "super::agencies::Column::Id"
    )]
    Agencies,
}

impl Related<super::agencies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agencies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for realty_core::document::Document {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            filename: model.filename,
            filepath: model.filepath,
            realtor_id: model.realtor_id,
            agency_id: model.agency_id,
            property_id: model.property_id,
            created_at: model.created_at.with_timezone(&chrono::Utc),
        }
    }
}
