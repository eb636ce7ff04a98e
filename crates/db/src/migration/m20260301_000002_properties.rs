//! Property listings, their audit trail, and realtor notifications.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Properties::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Properties::Title).string().not_null())
                    .col(ColumnDef::new(Properties::Description).text().null())
                    .col(ColumnDef::new(Properties::Price).big_integer().not_null())
                    .col(ColumnDef::new(Properties::Address).string().not_null())
                    .col(ColumnDef::new(Properties::Latitude).double().null())
                    .col(ColumnDef::new(Properties::Longitude).double().null())
                    .col(
                        ColumnDef::new(Properties::Status)
                            .string()
                            .not_null()
                            .default("for_sale"),
                    )
                    .col(ColumnDef::new(Properties::AgencyId).integer().not_null())
                    .col(ColumnDef::new(Properties::RealtorId).integer().not_null())
                    .col(
                        ColumnDef::new(Properties::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Properties::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_properties_agency")
                            .from(Properties::Table, Properties::AgencyId)
                            .to(Agencies::Table, Agencies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_properties_realtor")
                            .from(Properties::Table, Properties::RealtorId)
                            .to(Realtors::Table, Realtors::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_properties_agency_status")
                    .table(Properties::Table)
                    .col(Properties::AgencyId)
                    .col(Properties::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_properties_realtor_status")
                    .table(Properties::Table)
                    .col(Properties::RealtorId)
                    .col(Properties::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PropertyHistory::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PropertyHistory::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PropertyHistory::PropertyId).integer().not_null())
                    .col(ColumnDef::new(PropertyHistory::RealtorId).integer().not_null())
                    .col(ColumnDef::new(PropertyHistory::Action).string().not_null())
                    .col(ColumnDef::new(PropertyHistory::OldValue).text().null())
                    .col(ColumnDef::new(PropertyHistory::NewValue).text().null())
                    .col(
                        ColumnDef::new(PropertyHistory::Timestamp)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_history_property")
                            .from(PropertyHistory::Table, PropertyHistory::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_history_realtor")
                            .from(PropertyHistory::Table, PropertyHistory::RealtorId)
                            .to(Realtors::Table, Realtors::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_property_history_property")
                    .table(PropertyHistory::Table)
                    .col(PropertyHistory::PropertyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Notifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Notifications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Notifications::RealtorId).integer().not_null())
                    .col(ColumnDef::new(Notifications::Message).text().not_null())
                    .col(
                        ColumnDef::new(Notifications::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Notifications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_notifications_realtor")
                            .from(Notifications::Table, Notifications::RealtorId)
                            .to(Realtors::Table, Realtors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_notifications_realtor")
                    .table(Notifications::Table)
                    .col(Notifications::RealtorId)
                    .col(Notifications::IsRead)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Notifications::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PropertyHistory::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Properties::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Agencies {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Realtors {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Properties {
    Table,
    Id,
    Title,
    Description,
    Price,
    Address,
    Latitude,
    Longitude,
    Status,
    AgencyId,
    RealtorId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PropertyHistory {
    Table,
    Id,
    PropertyId,
    RealtorId,
    Action,
    OldValue,
    NewValue,
    Timestamp,
}

#[derive(DeriveIden)]
enum Notifications {
    Table,
    Id,
    RealtorId,
    Message,
    IsRead,
    CreatedAt,
}
