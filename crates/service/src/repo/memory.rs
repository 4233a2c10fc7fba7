//! In-process record store for tests and doc examples.
//!
//! Mirrors the relational schema: drivers, transports, a join list of
//! (driver, transport) links and shipments, each with its own id sequence.
//! Foreign keys are enforced as in the database: links and shipments must
//! reference existing rows, and deleting a driver drops its links and clears
//! the driver on its shipments.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::driver::domain::{Driver, NewDriver, NewTransport, Transport};
use crate::driver::repository::{DriverRepository, TransportRepository};
use crate::errors::ServiceError;
use crate::shipment::domain::{NewShipment, Shipment};
use crate::shipment::repository::ShipmentRepository;

#[derive(Default)]
struct Tables {
    drivers: BTreeMap<i32, Driver>,
    transports: BTreeMap<i32, Transport>,
    links: Vec<(i32, i32)>, // (driver_id, transport_id), insertion order
    shipments: BTreeMap<i32, Shipment>,
    driver_seq: i32,
    transport_seq: i32,
    shipment_seq: i32,
}

impl Tables {
    fn check_refs(&self, driver_id: Option<i32>, transport_id: Option<i32>) -> Result<(), ServiceError> {
        let dangling_driver = driver_id.is_some_and(|id| !self.drivers.contains_key(&id));
        let dangling_transport = transport_id.is_some_and(|id| !self.transports.contains_key(&id));
        if dangling_driver || dangling_transport {
            return Err(ServiceError::Db("FOREIGN KEY constraint failed".into()));
        }
        Ok(())
    }
}

fn next(seq: &mut i32) -> i32 {
    *seq += 1;
    *seq
}

#[derive(Default)]
pub struct MemoryRepository {
    tables: Mutex<Tables>,
}

impl MemoryRepository {
    fn tables(&self) -> Result<MutexGuard<'_, Tables>, ServiceError> {
        self.tables.lock().map_err(|_| ServiceError::Db("memory store lock poisoned".into()))
    }

    fn find_driver_by<F>(&self, field: F, value: &str, case_sensitive: bool) -> Result<Option<Driver>, ServiceError>
    where
        F: Fn(&Driver) -> &str,
    {
        let tables = self.tables()?;
        // ASCII folding, like SQLite's LOWER()
        Ok(tables
            .drivers
            .values()
            .find(|d| if case_sensitive { field(d) == value } else { field(d).eq_ignore_ascii_case(value) })
            .cloned())
    }
}

#[async_trait]
impl DriverRepository for MemoryRepository {
    async fn list_drivers(&self) -> Result<Vec<Driver>, ServiceError> {
        Ok(self.tables()?.drivers.values().cloned().collect())
    }

    async fn find_driver(&self, id: i32) -> Result<Option<Driver>, ServiceError> {
        Ok(self.tables()?.drivers.get(&id).cloned())
    }

    async fn find_driver_by_name(&self, name: &str, case_sensitive: bool) -> Result<Option<Driver>, ServiceError> {
        self.find_driver_by(|d| d.name.as_str(), name, case_sensitive)
    }

    async fn find_driver_by_email(&self, email: &str, case_sensitive: bool) -> Result<Option<Driver>, ServiceError> {
        self.find_driver_by(|d| d.email.as_str(), email, case_sensitive)
    }

    async fn insert_driver(&self, input: NewDriver) -> Result<Driver, ServiceError> {
        input.validate()?;
        let mut tables = self.tables()?;
        let now = Utc::now().into();
        let driver = Driver {
            id: next(&mut tables.driver_seq),
            name: input.name,
            contact_number: input.contact_number,
            license_number: input.license_number,
            availability: input.availability,
            address: input.address,
            email: input.email,
            password: input.password,
            vehicle_id: input.vehicle_id,
            notes: input.notes,
            photo: input.photo,
            created_at: now,
            updated_at: now,
        };
        tables.drivers.insert(driver.id, driver.clone());
        Ok(driver)
    }

    async fn save_driver(&self, mut driver: Driver) -> Result<Driver, ServiceError> {
        let mut tables = self.tables()?;
        if !tables.drivers.contains_key(&driver.id) {
            return Err(ServiceError::Db(format!("driver {} does not exist", driver.id)));
        }
        driver.updated_at = Utc::now().into();
        tables.drivers.insert(driver.id, driver.clone());
        Ok(driver)
    }

    async fn delete_driver(&self, id: i32) -> Result<u64, ServiceError> {
        let mut tables = self.tables()?;
        if tables.drivers.remove(&id).is_none() {
            return Ok(0);
        }
        tables.links.retain(|(d, _)| *d != id);
        for s in tables.shipments.values_mut().filter(|s| s.driver_id == Some(id)) {
            s.driver_id = None;
        }
        Ok(1)
    }

    async fn transports_of(&self, driver_id: i32) -> Result<Vec<Transport>, ServiceError> {
        let tables = self.tables()?;
        Ok(tables
            .links
            .iter()
            .filter(|(d, _)| *d == driver_id)
            .filter_map(|(_, t)| tables.transports.get(t).cloned())
            .collect())
    }

    async fn link_transport(&self, driver_id: i32, transport_id: i32) -> Result<(), ServiceError> {
        let mut tables = self.tables()?;
        tables.check_refs(Some(driver_id), Some(transport_id))?;
        tables.links.push((driver_id, transport_id));
        Ok(())
    }

    async fn unlink_transport(&self, driver_id: i32, transport_id: i32) -> Result<u64, ServiceError> {
        let mut tables = self.tables()?;
        let before = tables.links.len();
        tables.links.retain(|link| *link != (driver_id, transport_id));
        Ok((before - tables.links.len()) as u64)
    }
}

#[async_trait]
impl TransportRepository for MemoryRepository {
    async fn list_transports(&self) -> Result<Vec<Transport>, ServiceError> {
        Ok(self.tables()?.transports.values().cloned().collect())
    }

    async fn find_transport(&self, id: i32) -> Result<Option<Transport>, ServiceError> {
        Ok(self.tables()?.transports.get(&id).cloned())
    }

    async fn insert_transport(&self, input: NewTransport) -> Result<Transport, ServiceError> {
        input.validate()?;
        let mut tables = self.tables()?;
        let transport = Transport {
            id: next(&mut tables.transport_seq),
            plate_number: input.plate_number,
            kind: input.kind,
            capacity_kg: input.capacity_kg,
            available: input.available,
            created_at: Utc::now().into(),
        };
        tables.transports.insert(transport.id, transport.clone());
        Ok(transport)
    }
}

#[async_trait]
impl ShipmentRepository for MemoryRepository {
    async fn insert_shipment(&self, input: NewShipment) -> Result<Shipment, ServiceError> {
        input.validate()?;
        let mut tables = self.tables()?;
        tables.check_refs(input.driver_id, input.transport_id)?;
        let now = Utc::now().into();
        let shipment = Shipment {
            id: next(&mut tables.shipment_seq),
            driver_id: input.driver_id,
            transport_id: input.transport_id,
            origin: input.origin,
            destination: input.destination,
            status: input.status.unwrap_or_else(|| models::shipment::DEFAULT_STATUS.to_string()),
            weight_kg: input.weight_kg,
            created_at: now,
            updated_at: now,
        };
        tables.shipments.insert(shipment.id, shipment.clone());
        Ok(shipment)
    }

    async fn list_shipments(&self) -> Result<Vec<Shipment>, ServiceError> {
        Ok(self.tables()?.shipments.values().cloned().collect())
    }

    async fn find_shipment(&self, id: i32) -> Result<Option<Shipment>, ServiceError> {
        Ok(self.tables()?.shipments.get(&id).cloned())
    }

    async fn save_shipment(&self, mut shipment: Shipment) -> Result<Shipment, ServiceError> {
        let mut tables = self.tables()?;
        if !tables.shipments.contains_key(&shipment.id) {
            return Err(ServiceError::Db(format!("shipment {} does not exist", shipment.id)));
        }
        tables.check_refs(shipment.driver_id, shipment.transport_id)?;
        shipment.updated_at = Utc::now().into();
        tables.shipments.insert(shipment.id, shipment.clone());
        Ok(shipment)
    }

    async fn remove_shipment(&self, shipment: &Shipment) -> Result<(), ServiceError> {
        self.tables()?.shipments.remove(&shipment.id);
        Ok(())
    }

    async fn shipments_for_driver(&self, driver_id: i32) -> Result<Vec<Shipment>, ServiceError> {
        Ok(self.tables()?.shipments.values().filter(|s| s.driver_id == Some(driver_id)).cloned().collect())
    }

    async fn shipments_for_transport(&self, transport_id: i32) -> Result<Vec<Shipment>, ServiceError> {
        Ok(self.tables()?.shipments.values().filter(|s| s.transport_id == Some(transport_id)).cloned().collect())
    }

    async fn find_shipment_with_driver(&self, id: i32) -> Result<Option<(Shipment, Option<Driver>)>, ServiceError> {
        let tables = self.tables()?;
        Ok(tables.shipments.get(&id).map(|s| {
            let driver = s.driver_id.and_then(|d| tables.drivers.get(&d).cloned());
            (s.clone(), driver)
        }))
    }

    async fn find_shipment_with_transport(&self, id: i32) -> Result<Option<(Shipment, Option<Transport>)>, ServiceError> {
        let tables = self.tables()?;
        Ok(tables.shipments.get(&id).map(|s| {
            let transport = s.transport_id.and_then(|t| tables.transports.get(&t).cloned());
            (s.clone(), transport)
        }))
    }
}
