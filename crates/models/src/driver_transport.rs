//! Join relation between drivers and the transports assigned to them.
//! A pair may be stored more than once.
use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::{driver, transport};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "driver_transport")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub driver_id: i32,
    pub transport_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Driver,
    Transport,
}

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

pub async fn link(db: &DatabaseConnection, driver_id: i32, transport_id: i32) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        driver_id: Set(driver_id),
        transport_id: Set(transport_id),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Remove every row for the pair; returns the number of rows deleted.
pub async fn unlink(db: &DatabaseConnection, driver_id: i32, transport_id: i32) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_many()
        .filter(Column::DriverId.eq(driver_id))
        .filter(Column::TransportId.eq(transport_id))
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}
