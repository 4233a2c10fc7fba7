use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::{driver, transport};

pub const DEFAULT_STATUS: &str = "pending";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "shipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub driver_id: Option<i32>,
    pub transport_id: Option<i32>,
    pub origin: String,
    pub destination: String,
    pub status: String,
    pub weight_kg: f64,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Driver, Transport }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Driver => Entity::belongs_to(driver::Entity)
                .from(Column::DriverId)
                .to(driver::Column::Id)
                .into(),
            Relation::Transport => Entity::belongs_to(transport::Entity)
                .from(Column::TransportId)
                .to(transport::Column::Id)
                .into(),
        }
    }
}

impl Related<driver::Entity> for Entity {
    fn to() -> RelationDef { Relation::Driver.def() }
}

impl Related<transport::Entity> for Entity {
    fn to() -> RelationDef { Relation::Transport.def() }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewShipment {
    #[serde(default)]
    pub driver_id: Option<i32>,
    #[serde(default)]
    pub transport_id: Option<i32>,
    pub origin: String,
    pub destination: String,
    /// Defaults to [`DEFAULT_STATUS`] when absent.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub weight_kg: f64,
}

impl NewShipment {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate_weight(self.weight_kg)
    }
}

pub fn validate_weight(weight_kg: f64) -> Result<(), errors::ModelError> {
    if !weight_kg.is_finite() || weight_kg < 0.0 {
        return Err(errors::ModelError::Validation("weight_kg must be a non-negative number".into()));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, input: NewShipment) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let now = Utc::now().into();
    let am = ActiveModel {
        driver_id: Set(input.driver_id),
        transport_id: Set(input.transport_id),
        origin: Set(input.origin),
        destination: Set(input.destination),
        status: Set(input.status.unwrap_or_else(|| DEFAULT_STATUS.to_string())),
        weight_kg: Set(input.weight_kg),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Write every column of `model` back to its row and bump `updated_at`.
pub async fn save(db: &DatabaseConnection, model: Model) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: sea_orm::ActiveValue::Unchanged(model.id),
        driver_id: Set(model.driver_id),
        transport_id: Set(model.transport_id),
        origin: Set(model.origin),
        destination: Set(model.destination),
        status: Set(model.status),
        weight_kg: Set(model.weight_kg),
        created_at: sea_orm::ActiveValue::Unchanged(model.created_at),
        updated_at: Set(Utc::now().into()),
    };
    am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_must_be_non_negative_and_finite() {
        assert!(validate_weight(0.0).is_ok());
        assert!(validate_weight(1250.5).is_ok());
        assert!(validate_weight(-0.1).is_err());
        assert!(validate_weight(f64::NAN).is_err());
        assert!(validate_weight(f64::INFINITY).is_err());
    }

    #[test]
    fn new_shipment_from_minimal_json() {
        let s: NewShipment = serde_json::from_str(r#"{"origin":"Colombo","destination":"Kandy"}"#).unwrap();
        assert_eq!(s.driver_id, None);
        assert_eq!(s.status, None);
        assert_eq!(s.weight_kg, 0.0);
        assert!(s.validate().is_ok());
    }
}
