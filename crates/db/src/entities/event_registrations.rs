//! `SeaORM` Entity for event_registrations table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "event_registrations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub event_id: i32,
    pub realtor_id: i32,
    pub registered_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::training_events::Entity",
        from = "Column::EventId",
        to = "super::training_events::Column::Id"
    )]
    TrainingEvents,
}

impl Related<super::training_events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainingEvents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
