//! Create `shipment` table with nullable FKs to `driver` and `transport`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Shipment::Table)
                    .if_not_exists()
                    .col(pk_auto(Shipment::Id))
                    .col(ColumnDef::new(Shipment::DriverId).integer().null())
                    .col(ColumnDef::new(Shipment::TransportId).integer().null())
                    .col(string_len(Shipment::Origin, 255).not_null())
                    .col(string_len(Shipment::Destination, 255).not_null())
                    .col(string_len(Shipment::Status, 32).not_null())
                    .col(double(Shipment::WeightKg).not_null())
                    .col(timestamp_with_time_zone(Shipment::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Shipment::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shipment_driver")
                            .from(Shipment::Table, Shipment::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shipment_transport")
                            .from(Shipment::Table, Shipment::TransportId)
                            .to(Transport::Table, Transport::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Shipment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Shipment {
    Table,
    Id,
    DriverId,
    TransportId,
    Origin,
    Destination,
    Status,
    WeightKg,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Driver { Table, Id }

#[derive(DeriveIden)]
enum Transport { Table, Id }
