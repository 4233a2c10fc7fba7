//! Create `driver` table.
//!
//! Passwords are stored as given; nothing in this schema hashes them.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Driver::Table)
                    .if_not_exists()
                    .col(pk_auto(Driver::Id))
                    .col(string_len(Driver::Name, 128).not_null())
                    .col(string_len(Driver::ContactNumber, 32).not_null())
                    .col(string_len(Driver::LicenseNumber, 64).not_null())
                    .col(boolean(Driver::Availability).not_null())
                    .col(string_len(Driver::Address, 255).not_null())
                    .col(string_len(Driver::Email, 255).not_null())
                    .col(string_len(Driver::Password, 255).not_null())
                    .col(ColumnDef::new(Driver::VehicleId).integer().null())
                    .col(ColumnDef::new(Driver::Notes).text().null())
                    .col(ColumnDef::new(Driver::Photo).string_len(512).null())
                    .col(timestamp_with_time_zone(Driver::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Driver::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Driver::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Driver {
    Table,
    Id,
    Name,
    ContactNumber,
    LicenseNumber,
    Availability,
    Address,
    Email,
    Password,
    VehicleId,
    Notes,
    Photo,
    CreatedAt,
    UpdatedAt,
}
