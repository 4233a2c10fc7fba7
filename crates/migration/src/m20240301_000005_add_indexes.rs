use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Driver: lookups by email (login)
        manager
            .create_index(
                Index::create()
                    .name("idx_driver_email")
                    .table(Driver::Table)
                    .col(Driver::Email)
                    .to_owned(),
            )
            .await?;

        // DriverTransport: assigned transports per driver
        manager
            .create_index(
                Index::create()
                    .name("idx_driver_transport_driver")
                    .table(DriverTransport::Table)
                    .col(DriverTransport::DriverId)
                    .to_owned(),
            )
            .await?;

        // Shipment: per driver and per transport listings
        manager
            .create_index(
                Index::create()
                    .name("idx_shipment_driver")
                    .table(Shipment::Table)
                    .col(Shipment::DriverId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_shipment_transport")
                    .table(Shipment::Table)
                    .col(Shipment::TransportId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_driver_email").table(Driver::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_driver_transport_driver").table(DriverTransport::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_shipment_driver").table(Shipment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_shipment_transport").table(Shipment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Driver { Table, Email }

#[derive(DeriveIden)]
enum DriverTransport { Table, DriverId }

#[derive(DeriveIden)]
enum Shipment { Table, DriverId, TransportId }
