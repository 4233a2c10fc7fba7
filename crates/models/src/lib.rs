//! SeaORM entities for drivers, transports, their join relation and shipments,
//! plus input validation and the database connection helpers.

pub mod errors;
pub mod db;
pub mod driver;
pub mod transport;
pub mod driver_transport;
pub mod shipment;
