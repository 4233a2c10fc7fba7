//! Create `transport` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Transport::Table)
                    .if_not_exists()
                    .col(pk_auto(Transport::Id))
                    .col(string_len(Transport::PlateNumber, 32).not_null())
                    .col(string_len(Transport::Kind, 64).not_null())
                    .col(double(Transport::CapacityKg).not_null())
                    .col(boolean(Transport::Available).not_null())
                    .col(timestamp_with_time_zone(Transport::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Transport::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Transport { Table, Id, PlateNumber, Kind, CapacityKg, Available, CreatedAt }
