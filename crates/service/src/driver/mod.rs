//! Driver records: domain inputs, repository contracts and the business service.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::DriverService;
