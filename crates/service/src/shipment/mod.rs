//! Shipment records and traversal to their driver and transport.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::ShipmentService;
