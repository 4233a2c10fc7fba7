use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{NewShipment, Shipment, ShipmentPatch};
use super::repository::ShipmentRepository;
use crate::driver::domain::{Driver, Transport};
use crate::errors::ServiceError;

fn shipment_not_found(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("Shipment with ID {id} not found"))
}

/// Shipment records and lookups of their driver and transport.
pub struct ShipmentService<S: ShipmentRepository> {
    repo: Arc<S>,
}

impl<S: ShipmentRepository> ShipmentService<S> {
    pub fn new(repo: Arc<S>) -> Self { Self { repo } }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewShipment) -> Result<Shipment, ServiceError> {
        input.validate()?;
        let shipment = self.repo.insert_shipment(input).await?;
        info!(shipment_id = shipment.id, driver_id = ?shipment.driver_id, transport_id = ?shipment.transport_id, "shipment_created");
        Ok(shipment)
    }

    pub async fn list(&self) -> Result<Vec<Shipment>, ServiceError> {
        self.repo.list_shipments().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Shipment, ServiceError> {
        self.repo.find_shipment(id).await?.ok_or_else(|| shipment_not_found(id))
    }

    /// Merge every supplied field over the stored shipment.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: ShipmentPatch) -> Result<Shipment, ServiceError> {
        let mut shipment = self.get_by_id(id).await?;
        patch.validate()?;
        patch.merge_into(&mut shipment);
        let saved = self.repo.save_shipment(shipment).await?;
        info!(shipment_id = id, "shipment_updated");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let shipment = self.get_by_id(id).await?;
        self.repo.remove_shipment(&shipment).await?;
        info!(shipment_id = id, "shipment_deleted");
        Ok(())
    }

    pub async fn get_for_driver(&self, driver_id: i32) -> Result<Vec<Shipment>, ServiceError> {
        self.repo.shipments_for_driver(driver_id).await
    }

    pub async fn get_for_transport(&self, transport_id: i32) -> Result<Vec<Shipment>, ServiceError> {
        self.repo.shipments_for_transport(transport_id).await
    }

    /// Driver of a shipment. NotFound when the shipment is absent; `Ok(None)`
    /// when it exists without a driver.
    pub async fn get_driver_for(&self, shipment_id: i32) -> Result<Option<Driver>, ServiceError> {
        let (_, driver) = self.repo
            .find_shipment_with_driver(shipment_id)
            .await?
            .ok_or_else(|| shipment_not_found(shipment_id))?;
        Ok(driver)
    }

    /// Transport of a shipment, with the same absence rules as [`Self::get_driver_for`].
    pub async fn get_transport_for(&self, shipment_id: i32) -> Result<Option<Transport>, ServiceError> {
        let (_, transport) = self.repo
            .find_shipment_with_transport(shipment_id)
            .await?
            .ok_or_else(|| shipment_not_found(shipment_id))?;
        Ok(transport)
    }
}
