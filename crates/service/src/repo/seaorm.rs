use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::{driver, driver_transport, shipment, transport};

use crate::driver::domain::{Driver, NewDriver, NewTransport, Transport};
use crate::driver::repository::{DriverRepository, TransportRepository};
use crate::errors::ServiceError;
use crate::shipment::domain::{NewShipment, Shipment};
use crate::shipment::repository::ShipmentRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    async fn find_driver_by(&self, column: driver::Column, value: &str, case_sensitive: bool) -> Result<Option<Driver>, ServiceError> {
        let select = if case_sensitive {
            driver::Entity::find().filter(column.eq(value))
        } else {
            driver::Entity::find()
                .filter(Expr::expr(Func::lower(Expr::col(column))).eq(Func::lower(Expr::val(value))))
        };
        select
            .order_by_asc(driver::Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }
}

#[async_trait]
impl DriverRepository for SeaOrmRepository {
    async fn list_drivers(&self) -> Result<Vec<Driver>, ServiceError> {
        driver::Entity::find()
            .order_by_asc(driver::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_driver(&self, id: i32) -> Result<Option<Driver>, ServiceError> {
        driver::Entity::find_by_id(id).one(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_driver_by_name(&self, name: &str, case_sensitive: bool) -> Result<Option<Driver>, ServiceError> {
        self.find_driver_by(driver::Column::Name, name, case_sensitive).await
    }

    async fn find_driver_by_email(&self, email: &str, case_sensitive: bool) -> Result<Option<Driver>, ServiceError> {
        self.find_driver_by(driver::Column::Email, email, case_sensitive).await
    }

    async fn insert_driver(&self, input: NewDriver) -> Result<Driver, ServiceError> {
        Ok(driver::create(&self.db, input).await?)
    }

    async fn save_driver(&self, d: Driver) -> Result<Driver, ServiceError> {
        Ok(driver::save(&self.db, d).await?)
    }

    async fn delete_driver(&self, id: i32) -> Result<u64, ServiceError> {
        let res = driver::Entity::delete_by_id(id).exec(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(res.rows_affected)
    }

    async fn transports_of(&self, driver_id: i32) -> Result<Vec<Transport>, ServiceError> {
        let links = driver_transport::Entity::find()
            .filter(driver_transport::Column::DriverId.eq(driver_id))
            .order_by_asc(driver_transport::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        if links.is_empty() {
            return Ok(Vec::new());
        }
        // one row per link, so a pair stored twice yields the transport twice
        let ids: Vec<i32> = links.iter().map(|l| l.transport_id).collect();
        let by_id: HashMap<i32, Transport> = transport::Entity::find()
            .filter(transport::Column::Id.is_in(ids.clone()))
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
            .into_iter()
            .map(|t| (t.id, t))
            .collect();
        Ok(ids.iter().filter_map(|id| by_id.get(id).cloned()).collect())
    }

    async fn link_transport(&self, driver_id: i32, transport_id: i32) -> Result<(), ServiceError> {
        driver_transport::link(&self.db, driver_id, transport_id).await?;
        Ok(())
    }

    async fn unlink_transport(&self, driver_id: i32, transport_id: i32) -> Result<u64, ServiceError> {
        Ok(driver_transport::unlink(&self.db, driver_id, transport_id).await?)
    }
}

#[async_trait]
impl TransportRepository for SeaOrmRepository {
    async fn list_transports(&self) -> Result<Vec<Transport>, ServiceError> {
        transport::Entity::find()
            .order_by_asc(transport::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_transport(&self, id: i32) -> Result<Option<Transport>, ServiceError> {
        transport::Entity::find_by_id(id).one(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn insert_transport(&self, input: NewTransport) -> Result<Transport, ServiceError> {
        Ok(transport::create(&self.db, input).await?)
    }
}

#[async_trait]
impl ShipmentRepository for SeaOrmRepository {
    async fn insert_shipment(&self, input: NewShipment) -> Result<Shipment, ServiceError> {
        Ok(shipment::create(&self.db, input).await?)
    }

    async fn list_shipments(&self) -> Result<Vec<Shipment>, ServiceError> {
        shipment::Entity::find()
            .order_by_asc(shipment::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_shipment(&self, id: i32) -> Result<Option<Shipment>, ServiceError> {
        shipment::Entity::find_by_id(id).one(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn save_shipment(&self, s: Shipment) -> Result<Shipment, ServiceError> {
        Ok(shipment::save(&self.db, s).await?)
    }

    async fn remove_shipment(&self, s: &Shipment) -> Result<(), ServiceError> {
        shipment::Entity::delete_by_id(s.id).exec(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }

    async fn shipments_for_driver(&self, driver_id: i32) -> Result<Vec<Shipment>, ServiceError> {
        shipment::Entity::find()
            .filter(shipment::Column::DriverId.eq(driver_id))
            .order_by_asc(shipment::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn shipments_for_transport(&self, transport_id: i32) -> Result<Vec<Shipment>, ServiceError> {
        shipment::Entity::find()
            .filter(shipment::Column::TransportId.eq(transport_id))
            .order_by_asc(shipment::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_shipment_with_driver(&self, id: i32) -> Result<Option<(Shipment, Option<Driver>)>, ServiceError> {
        shipment::Entity::find_by_id(id)
            .find_also_related(driver::Entity)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_shipment_with_transport(&self, id: i32) -> Result<Option<(Shipment, Option<Transport>)>, ServiceError> {
        shipment::Entity::find_by_id(id)
            .find_also_related(transport::Entity)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }
}
