//! Calendar events, documents, and training events with registrations.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CalendarEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CalendarEvents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CalendarEvents::PropertyId).integer().not_null())
                    .col(ColumnDef::new(CalendarEvents::RealtorId).integer().not_null())
                    .col(
                        ColumnDef::new(CalendarEvents::EventType)
                            .string()
                            .not_null()
                            .default("viewing"),
                    )
                    .col(ColumnDef::new(CalendarEvents::Title).string().not_null())
                    .col(ColumnDef::new(CalendarEvents::Description).text().null())
                    .col(
                        ColumnDef::new(CalendarEvents::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CalendarEvents::EndTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CalendarEvents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calendar_events_property")
                            .from(CalendarEvents::Table, CalendarEvents::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calendar_events_realtor")
                            .from(CalendarEvents::Table, CalendarEvents::RealtorId)
                            .to(Realtors::Table, Realtors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_calendar_events_realtor_start")
                    .table(CalendarEvents::Table)
                    .col(CalendarEvents::RealtorId)
                    .col(CalendarEvents::StartTime)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Documents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Documents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Documents::Filename).string().not_null())
                    .col(ColumnDef::new(Documents::Filepath).string().not_null().unique_key())
                    .col(ColumnDef::new(Documents::RealtorId).integer().not_null())
                    .col(ColumnDef::new(Documents::AgencyId).integer().not_null())
                    .col(ColumnDef::new(Documents::PropertyId).integer().null())
                    .col(
                        ColumnDef::new(Documents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_documents_realtor")
                            .from(Documents::Table, Documents::RealtorId)
                            .to(Realtors::Table, Realtors::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_documents_agency")
                            .from(Documents::Table, Documents::AgencyId)
                            .to(Agencies::Table, Agencies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_documents_property")
                            .from(Documents::Table, Documents::PropertyId)
                            .to(Properties::Table, Properties::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_documents_agency")
                    .table(Documents::Table)
                    .col(Documents::AgencyId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrainingEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrainingEvents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TrainingEvents::Title).string().not_null())
                    .col(ColumnDef::new(TrainingEvents::Description).text().null())
                    .col(ColumnDef::new(TrainingEvents::Speaker).string().not_null())
                    .col(
                        ColumnDef::new(TrainingEvents::StartTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrainingEvents::EndTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrainingEvents::IsOnline)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(TrainingEvents::Link).string().null())
                    .col(
                        ColumnDef::new(TrainingEvents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EventRegistrations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventRegistrations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EventRegistrations::EventId).integer().not_null())
                    .col(ColumnDef::new(EventRegistrations::RealtorId).integer().not_null())
                    .col(
                        ColumnDef::new(EventRegistrations::RegisteredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_registrations_event")
                            .from(EventRegistrations::Table, EventRegistrations::EventId)
                            .to(TrainingEvents::Table, TrainingEvents::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_registrations_realtor")
                            .from(EventRegistrations::Table, EventRegistrations::RealtorId)
                            .to(Realtors::Table, Realtors::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_event_registrations_event_realtor")
                    .table(EventRegistrations::Table)
                    .col(EventRegistrations::EventId)
                    .col(EventRegistrations::RealtorId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(EventRegistrations::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(TrainingEvents::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Documents::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CalendarEvents::Table).if_exists().to_owned())
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
}

#[derive(DeriveIden)]
enum CalendarEvents {
    Table,
    Id,
    PropertyId,
    RealtorId,
    EventType,
    Title,
    Description,
    StartTime,
    EndTime,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Documents {
    Table,
    Id,
    Filename,
    Filepath,
    RealtorId,
    AgencyId,
    PropertyId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TrainingEvents {
    Table,
    Id,
    Title,
    Description,
    Speaker,
    StartTime,
    EndTime,
    IsOnline,
    Link,
    CreatedAt,
}

#[derive(DeriveIden)]
enum EventRegistrations {
    Table,
    Id,
    EventId,
    RealtorId,
    RegisteredAt,
}
