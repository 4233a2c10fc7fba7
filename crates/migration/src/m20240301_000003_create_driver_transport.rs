//! Create `driver_transport` join table.
//!
//! Carries its own surrogate key: the same (driver, transport) pair may appear
//! more than once, so the pair is not unique.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DriverTransport::Table)
                    .if_not_exists()
                    .col(pk_auto(DriverTransport::Id))
                    .col(integer(DriverTransport::DriverId).not_null())
                    .col(integer(DriverTransport::TransportId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_driver_transport_driver")
                            .from(DriverTransport::Table, DriverTransport::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_driver_transport_transport")
                            .from(DriverTransport::Table, DriverTransport::TransportId)
                            .to(Transport::Table, Transport::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(DriverTransport::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum DriverTransport { Table, Id, DriverId, TransportId }

#[derive(DeriveIden)]
enum Driver { Table, Id }

#[derive(DeriveIden)]
enum Transport { Table, Id }
