//! Service layer for driver and shipment records.
//! - `driver` and `shipment` hold the business rules over repository traits.
//! - `repo` provides the SeaORM-backed store and an in-memory store.
//! - Entities and validation live in the `models` crate.

pub mod errors;
pub mod patch;
pub mod driver;
pub mod shipment;
pub mod repo;
#[cfg(test)]
pub mod test_support;
