use serde::{Deserialize, Serialize};

use crate::patch::{double_option, truthy};

pub use models::driver::{Model as Driver, NewDriver};
pub use models::transport::{Model as Transport, NewTransport};

/// Partial update for a driver.
///
/// Text fields are applied only when present and non-empty; `availability` and
/// `vehicle_id` are applied whenever supplied, so `false` and an explicit
/// `null` vehicle both take effect.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DriverPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub availability: Option<bool>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<Option<i32>>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

impl DriverPatch {
    pub fn apply_to(self, driver: &mut Driver) {
        if let Some(v) = truthy(self.name) { driver.name = v; }
        if let Some(v) = truthy(self.contact_number) { driver.contact_number = v; }
        if let Some(v) = truthy(self.license_number) { driver.license_number = v; }
        if let Some(v) = self.availability { driver.availability = v; }
        if let Some(v) = truthy(self.address) { driver.address = v; }
        if let Some(v) = truthy(self.email) { driver.email = v; }
        if let Some(v) = truthy(self.password) { driver.password = v; }
        if let Some(v) = self.vehicle_id { driver.vehicle_id = v; }
        if let Some(v) = truthy(self.notes) { driver.notes = Some(v); }
        if let Some(v) = truthy(self.photo) { driver.photo = Some(v); }
    }
}

/// Login input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverLogin {
    pub email: String,
    pub password: String,
}

/// A driver together with its assigned transports, in assignment order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverWithTransports {
    #[serde(flatten)]
    pub driver: Driver,
    pub transports: Vec<Transport>,
}
