//! Agencies and their realtors.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Agencies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Agencies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Agencies::Name).string().not_null().unique_key())
                    .col(
                        ColumnDef::new(Agencies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Realtors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Realtors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Realtors::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Realtors::FullName).string().null())
                    .col(ColumnDef::new(Realtors::HashedPassword).string().not_null())
                    .col(
                        ColumnDef::new(Realtors::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Realtors::Role)
                            .string()
                            .not_null()
                            .default("realtor"),
                    )
                    .col(ColumnDef::new(Realtors::AgencyId).integer().not_null())
                    .col(
                        ColumnDef::new(Realtors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_realtors_agency")
                            .from(Realtors::Table, Realtors::AgencyId)
                            .to(Agencies::Table, Agencies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_realtors_agency")
                    .table(Realtors::Table)
                    .col(Realtors::AgencyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Realtors::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Agencies::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Agencies {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Realtors {
    Table,
    Id,
    Email,
    FullName,
    HashedPassword,
    IsActive,
    Role,
    AgencyId,
    CreatedAt,
}
