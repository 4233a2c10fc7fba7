use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::{driver_transport, shipment};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transport")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub plate_number: String,
    pub kind: String,
    pub capacity_kg: f64,
    pub available: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    DriverTransport,
    Shipment,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::DriverTransport => Entity::has_many(driver_transport::Entity).into(),
            Relation::Shipment => Entity::has_many(shipment::Entity).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewTransport {
    pub plate_number: String,
    pub kind: String,
    pub capacity_kg: f64,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool { true }

impl NewTransport {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        if self.plate_number.trim().is_empty() {
            return Err(errors::ModelError::Validation("plate_number required".into()));
        }
        if !self.capacity_kg.is_finite() || self.capacity_kg < 0.0 {
            return Err(errors::ModelError::Validation("capacity_kg must be a non-negative number".into()));
        }
        Ok(())
    }
}

pub async fn create(db: &DatabaseConnection, input: NewTransport) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let am = ActiveModel {
        plate_number: Set(input.plate_number),
        kind: Set(input.kind),
        capacity_kg: Set(input.capacity_kg),
        available: Set(input.available),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_transport_input() {
        let ok = NewTransport { plate_number: "AB-123".into(), kind: "truck".into(), capacity_kg: 12000.0, available: true };
        assert!(ok.validate().is_ok());

        let no_plate = NewTransport { plate_number: " ".into(), ..ok.clone() };
        assert!(no_plate.validate().is_err());

        let negative = NewTransport { capacity_kg: -1.0, ..ok };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn available_defaults_to_true() {
        let t: NewTransport = serde_json::from_str(r#"{"plate_number":"X","kind":"van","capacity_kg":800}"#).unwrap();
        assert!(t.available);
    }
}
