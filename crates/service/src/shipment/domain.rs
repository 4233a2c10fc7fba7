use serde::{Deserialize, Serialize};

use crate::patch::double_option;

pub use models::shipment::{Model as Shipment, NewShipment};

/// Partial update for a shipment: every supplied field overwrites, including
/// empty strings, `0.0` and an explicit `null` driver or transport.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShipmentPatch {
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub transport_id: Option<Option<i32>>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
}

impl ShipmentPatch {
    pub fn validate(&self) -> Result<(), models::errors::ModelError> {
        match self.weight_kg {
            Some(w) => models::shipment::validate_weight(w),
            None => Ok(()),
        }
    }

    pub fn merge_into(self, shipment: &mut Shipment) {
        if let Some(v) = self.driver_id { shipment.driver_id = v; }
        if let Some(v) = self.transport_id { shipment.transport_id = v; }
        if let Some(v) = self.origin { shipment.origin = v; }
        if let Some(v) = self.destination { shipment.destination = v; }
        if let Some(v) = self.status { shipment.status = v; }
        if let Some(v) = self.weight_kg { shipment.weight_kg = v; }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn shipment() -> Shipment {
        Shipment {
            id: 1,
            driver_id: Some(2),
            transport_id: Some(3),
            origin: "Colombo".into(),
            destination: "Galle".into(),
            status: "pending".into(),
            weight_kg: 120.0,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    #[test]
    fn falsy_values_overwrite() {
        let mut s = shipment();
        ShipmentPatch { driver_id: Some(None), status: Some(String::new()), weight_kg: Some(0.0), ..Default::default() }.merge_into(&mut s);
        assert_eq!(s.driver_id, None);
        assert_eq!(s.status, "");
        assert_eq!(s.weight_kg, 0.0);
        assert_eq!(s.transport_id, Some(3));
        assert_eq!(s.origin, "Colombo");
    }

    #[test]
    fn json_null_clears_reference() {
        let p: ShipmentPatch = serde_json::from_str(r#"{"transport_id":null}"#).unwrap();
        let mut s = shipment();
        p.merge_into(&mut s);
        assert_eq!(s.transport_id, None);
        assert_eq!(s.driver_id, Some(2));
    }

    #[test]
    fn negative_weight_is_rejected() {
        assert!(ShipmentPatch { weight_kg: Some(-5.0), ..Default::default() }.validate().is_err());
        assert!(ShipmentPatch::default().validate().is_ok());
    }
}
