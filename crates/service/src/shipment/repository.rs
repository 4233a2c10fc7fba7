use async_trait::async_trait;

use super::domain::{NewShipment, Shipment};
use crate::driver::domain::{Driver, Transport};
use crate::errors::ServiceError;

/// Persistence contract for shipments.
#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    async fn insert_shipment(&self, input: NewShipment) -> Result<Shipment, ServiceError>;
    async fn list_shipments(&self) -> Result<Vec<Shipment>, ServiceError>;
    async fn find_shipment(&self, id: i32) -> Result<Option<Shipment>, ServiceError>;
    async fn save_shipment(&self, shipment: Shipment) -> Result<Shipment, ServiceError>;
    async fn remove_shipment(&self, shipment: &Shipment) -> Result<(), ServiceError>;
    async fn shipments_for_driver(&self, driver_id: i32) -> Result<Vec<Shipment>, ServiceError>;
    async fn shipments_for_transport(&self, transport_id: i32) -> Result<Vec<Shipment>, ServiceError>;
    /// The shipment with its driver loaded; `None` when the shipment is absent.
    async fn find_shipment_with_driver(&self, id: i32) -> Result<Option<(Shipment, Option<Driver>)>, ServiceError>;
    async fn find_shipment_with_transport(&self, id: i32) -> Result<Option<(Shipment, Option<Transport>)>, ServiceError>;
}
