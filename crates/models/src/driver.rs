use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::{driver_transport, shipment};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "driver")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub contact_number: String,
    pub license_number: String,
    pub availability: bool,
    pub address: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub vehicle_id: Option<i32>,
    pub notes: Option<String>,
    pub photo: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
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

/// Fields accepted when registering a driver.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NewDriver {
    pub name: String,
    pub contact_number: String,
    pub license_number: String,
    #[serde(default)]
    pub availability: bool,
    pub address: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub vehicle_id: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

impl NewDriver {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        validate_name(&self.name)?;
        validate_email(&self.email)
    }
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    if !email.contains('@') { return Err(errors::ModelError::Validation("invalid email".into())); }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, input: NewDriver) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let now = Utc::now().into();
    let am = ActiveModel {
        name: Set(input.name),
        contact_number: Set(input.contact_number),
        license_number: Set(input.license_number),
        availability: Set(input.availability),
        address: Set(input.address),
        email: Set(input.email),
        password: Set(input.password),
        vehicle_id: Set(input.vehicle_id),
        notes: Set(input.notes),
        photo: Set(input.photo),
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
        name: Set(model.name),
        contact_number: Set(model.contact_number),
        license_number: Set(model.license_number),
        availability: Set(model.availability),
        address: Set(model.address),
        email: Set(model.email),
        password: Set(model.password),
        vehicle_id: Set(model.vehicle_id),
        notes: Set(model.notes),
        photo: Set(model.photo),
        created_at: sea_orm::ActiveValue::Unchanged(model.created_at),
        updated_at: Set(Utc::now().into()),
    };
    am.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewDriver {
        NewDriver {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn validate_accepts_minimal_driver() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_name_and_bad_email() {
        let mut d = sample();
        d.name = "   ".into();
        assert!(matches!(d.validate(), Err(errors::ModelError::Validation(_))));

        let mut d = sample();
        d.email = "jane.example.com".into();
        assert!(matches!(d.validate(), Err(errors::ModelError::Validation(_))));
    }

    #[test]
    fn password_is_not_serialized() {
        let json = serde_json::to_value(Model {
            id: 1,
            name: "Jane".into(),
            contact_number: "555".into(),
            license_number: "L-1".into(),
            availability: true,
            address: "1 Main St".into(),
            email: "jane@example.com".into(),
            password: "secret".into(),
            vehicle_id: None,
            notes: None,
            photo: None,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "jane@example.com");
    }
}
