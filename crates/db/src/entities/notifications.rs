//! `SeaORM` Entity for notifications table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub realtor_id: i32,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::realtors::Entity",
        from = "Column::RealtorId",
        to = "super::realtors::Column::Id"
    )]
    Realtors,
}

impl Related<super::realtors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Realtors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
