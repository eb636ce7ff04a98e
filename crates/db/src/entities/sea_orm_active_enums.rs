//! String-backed enums stored in the database, with conversions to the
//! domain types in `realty-core`.

use realty_core::{auth, calendar, property};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum RealtorRole {
    #[sea_orm(string_value = "realtor")]
    Realtor,
    #[sea_orm(string_value = "manager")]
    Manager,
    #[sea_orm(string_value = "admin")]
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    #[sea_orm(string_value = "for_sale")]
    ForSale,
    #[sea_orm(string_value = "reserved")]
    Reserved,
    #[sea_orm(string_value = "sold")]
    Sold,
    #[sea_orm(string_value = "archived")]
    Archived,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum CalendarEventType {
    #[sea_orm(string_value = "viewing")]
    Viewing,
    #[sea_orm(string_value = "deal")]
    Deal,
    #[sea_orm(string_value = "other")]
    Other,
}

impl From<auth::RealtorRole> for RealtorRole {
    fn from(role: auth::RealtorRole) -> Self {
        match role {
            auth::RealtorRole::Realtor => Self::Realtor,
            auth::RealtorRole::Manager => Self::Manager,
            auth::RealtorRole::Admin => Self::Admin,
        }
    }
}

impl From<RealtorRole> for auth::RealtorRole {
    fn from(role: RealtorRole) -> Self {
        match role {
            RealtorRole::Realtor => Self::Realtor,
            RealtorRole::Manager => Self::Manager,
            RealtorRole::Admin => Self::Admin,
        }
    }
}

impl From<property::PropertyStatus> for PropertyStatus {
    fn from(status: property::PropertyStatus) -> Self {
        match status {
            property::PropertyStatus::ForSale => Self::ForSale,
            property::PropertyStatus::Reserved => Self::Reserved,
            property::PropertyStatus::Sold => Self::Sold,
            property::PropertyStatus::Archived => Self::Archived,
        }
    }
}

impl From<PropertyStatus> for property::PropertyStatus {
    fn from(status: PropertyStatus) -> Self {
        match status {
            PropertyStatus::ForSale => Self::ForSale,
            PropertyStatus::Reserved => Self::Reserved,
            PropertyStatus::Sold => Self::Sold,
            PropertyStatus::Archived => Self::Archived,
        }
    }
}

impl From<calendar::CalendarEventType> for CalendarEventType {
    fn from(kind: calendar::CalendarEventType) -> Self {
        match kind {
            calendar::CalendarEventType::Viewing => Self::Viewing,
            calendar::CalendarEventType::Deal => Self::Deal,
            calendar::CalendarEventType::Other => Self::Other,
        }
    }
}

impl From<CalendarEventType> for calendar::CalendarEventType {
    fn from(kind: CalendarEventType) -> Self {
        match kind {
            CalendarEventType::Viewing => Self::Viewing,
            CalendarEventType::Deal => Self::Deal,
            CalendarEventType::Other => Self::Other,
        }
    }
}
