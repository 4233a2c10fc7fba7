use async_trait::async_trait;

use super::domain::{Driver, NewDriver, NewTransport, Transport};
use crate::errors::ServiceError;

/// Persistence contract for drivers and their transport assignments.
#[async_trait]
pub trait DriverRepository: Send + Sync {
    async fn list_drivers(&self) -> Result<Vec<Driver>, ServiceError>;
    async fn find_driver(&self, id: i32) -> Result<Option<Driver>, ServiceError>;
    /// Case-insensitive matching compares `LOWER(name) = LOWER(query)`; under
    /// SQLite only ASCII letters fold.
    async fn find_driver_by_name(&self, name: &str, case_sensitive: bool) -> Result<Option<Driver>, ServiceError>;
    async fn find_driver_by_email(&self, email: &str, case_sensitive: bool) -> Result<Option<Driver>, ServiceError>;
    async fn insert_driver(&self, input: NewDriver) -> Result<Driver, ServiceError>;
    async fn save_driver(&self, driver: Driver) -> Result<Driver, ServiceError>;
    /// Returns the number of rows removed.
    async fn delete_driver(&self, id: i32) -> Result<u64, ServiceError>;

    /// Transports linked to the driver, one entry per link, in link order.
    async fn transports_of(&self, driver_id: i32) -> Result<Vec<Transport>, ServiceError>;
    /// Add a link; an existing identical link is not checked for.
    async fn link_transport(&self, driver_id: i32, transport_id: i32) -> Result<(), ServiceError>;
    /// Remove all links for the pair; returns how many were removed.
    async fn unlink_transport(&self, driver_id: i32, transport_id: i32) -> Result<u64, ServiceError>;
}

#[async_trait]
pub trait TransportRepository: Send + Sync {
    async fn list_transports(&self) -> Result<Vec<Transport>, ServiceError>;
    async fn find_transport(&self, id: i32) -> Result<Option<Transport>, ServiceError>;
    async fn insert_transport(&self, input: NewTransport) -> Result<Transport, ServiceError>;
}
