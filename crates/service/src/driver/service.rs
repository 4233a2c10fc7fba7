use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::domain::{Driver, DriverLogin, DriverPatch, DriverWithTransports, NewDriver};
use super::repository::{DriverRepository, TransportRepository};
use crate::errors::ServiceError;

pub const DRIVER_NOT_FOUND: &str = "Driver not found";
pub const TRANSPORT_NOT_FOUND: &str = "Transport not found";
pub const NO_TRANSPORTS_ASSIGNED: &str = "No transports are assigned to this driver";

/// Driver records and their transport assignments.
pub struct DriverService<D: DriverRepository, T: TransportRepository> {
    drivers: Arc<D>,
    transports: Arc<T>,
}

impl<D: DriverRepository, T: TransportRepository> DriverService<D, T> {
    pub fn new(drivers: Arc<D>, transports: Arc<T>) -> Self { Self { drivers, transports } }

    pub async fn list(&self) -> Result<Vec<Driver>, ServiceError> {
        self.drivers.list_drivers().await
    }

    /// Absent drivers are `Ok(None)`, not an error.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Driver>, ServiceError> {
        self.drivers.find_driver(id).await
    }

    pub async fn get_by_name(&self, name: &str, case_sensitive: bool) -> Result<Option<Driver>, ServiceError> {
        self.drivers.find_driver_by_name(name, case_sensitive).await
    }

    pub async fn get_by_email(&self, email: &str, case_sensitive: bool) -> Result<Option<Driver>, ServiceError> {
        self.drivers.find_driver_by_email(email, case_sensitive).await
    }

    /// Register a driver.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::driver::{DriverService, domain::NewDriver};
    /// use service::repo::memory::MemoryRepository;
    /// let repo = Arc::new(MemoryRepository::default());
    /// let svc = DriverService::new(repo.clone(), repo);
    /// let input = NewDriver { name: "Jane".into(), email: "jane@example.com".into(), password: "pw".into(), ..Default::default() };
    /// let driver = tokio_test::block_on(svc.create(input)).unwrap();
    /// assert_eq!(driver.id, 1);
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: NewDriver) -> Result<Driver, ServiceError> {
        input.validate()?;
        let driver = self.drivers.insert_driver(input).await?;
        info!(driver_id = driver.id, "driver_created");
        Ok(driver)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let affected = self.drivers.delete_driver(id).await?;
        if affected == 0 {
            return Err(ServiceError::NotFound(DRIVER_NOT_FOUND.into()));
        }
        info!(driver_id = id, "driver_deleted");
        Ok(())
    }

    /// Apply `patch` to the stored driver; see [`DriverPatch`] for which values count.
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i32, patch: DriverPatch) -> Result<Driver, ServiceError> {
        let mut driver = self.require_driver(id).await?;
        patch.apply_to(&mut driver);
        let updated = self.drivers.save_driver(driver).await?;
        info!(driver_id = id, "driver_updated");
        Ok(updated)
    }

    /// The driver with its transports; an empty assignment list is reported as NotFound.
    #[instrument(skip(self))]
    pub async fn get_assigned_transports(&self, id: i32) -> Result<DriverWithTransports, ServiceError> {
        let driver = self.require_driver(id).await?;
        let transports = self.drivers.transports_of(id).await?;
        if transports.is_empty() {
            return Err(ServiceError::NotFound(NO_TRANSPORTS_ASSIGNED.into()));
        }
        Ok(DriverWithTransports { driver, transports })
    }

    /// Link a transport to a driver. Assigning the same transport twice stores it twice.
    #[instrument(skip(self))]
    pub async fn assign_transport(&self, driver_id: i32, transport_id: i32) -> Result<DriverWithTransports, ServiceError> {
        let driver = self.require_driver(driver_id).await?;
        self.require_transport(transport_id).await?;
        self.drivers.link_transport(driver_id, transport_id).await?;
        let transports = self.drivers.transports_of(driver_id).await?;
        info!(driver_id, transport_id, assigned = transports.len(), "transport_assigned");
        Ok(DriverWithTransports { driver, transports })
    }

    /// Remove every assignment of `transport_id` from the driver.
    #[instrument(skip(self))]
    pub async fn unassign_transport(&self, driver_id: i32, transport_id: i32) -> Result<DriverWithTransports, ServiceError> {
        let driver = self.require_driver(driver_id).await?;
        self.require_transport(transport_id).await?;
        let removed = self.drivers.unlink_transport(driver_id, transport_id).await?;
        let transports = self.drivers.transports_of(driver_id).await?;
        info!(driver_id, transport_id, removed, "transport_unassigned");
        Ok(DriverWithTransports { driver, transports })
    }

    /// Compare the supplied password with the stored one as plain text.
    /// Email lookup is exact; an unknown email is NotFound.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: DriverLogin) -> Result<bool, ServiceError> {
        let driver = self.drivers
            .find_driver_by_email(&input.email, true)
            .await?
            .ok_or_else(|| ServiceError::NotFound(DRIVER_NOT_FOUND.into()))?;
        let matches = driver.password == input.password;
        if matches {
            info!(driver_id = driver.id, "driver_login");
        } else {
            warn!(driver_id = driver.id, "driver_login_rejected");
        }
        Ok(matches)
    }

    async fn require_driver(&self, id: i32) -> Result<Driver, ServiceError> {
        self.drivers.find_driver(id).await?.ok_or_else(|| {
            debug!(driver_id = id, "driver missing");
            ServiceError::NotFound(DRIVER_NOT_FOUND.into())
        })
    }

    async fn require_transport(&self, id: i32) -> Result<(), ServiceError> {
        match self.transports.find_transport(id).await? {
            Some(_) => Ok(()),
            None => {
                debug!(transport_id = id, "transport missing");
                Err(ServiceError::NotFound(TRANSPORT_NOT_FOUND.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::domain::NewTransport;
    use crate::repo::memory::MemoryRepository;

    type Svc = DriverService<MemoryRepository, MemoryRepository>;

    fn setup() -> (Arc<MemoryRepository>, Svc) {
        let repo = Arc::new(MemoryRepository::default());
        (repo.clone(), DriverService::new(repo.clone(), repo))
    }

    fn new_driver(name: &str, email: &str) -> NewDriver {
        NewDriver {
            name: name.into(),
            contact_number: "0771234567".into(),
            license_number: "B1234567".into(),
            availability: true,
            address: "12 Lake Rd".into(),
            email: email.into(),
            password: "s3cret".into(),
            vehicle_id: Some(4),
            notes: Some("prefers day shifts".into()),
            photo: None,
        }
    }

    async fn new_transport(repo: &MemoryRepository, plate: &str) -> i32 {
        repo.insert_transport(NewTransport { plate_number: plate.into(), kind: "truck".into(), capacity_kg: 8000.0, available: true })
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn create_and_get_by_id() {
        let (_, svc) = setup();
        let d = svc.create(new_driver("Jane", "jane@example.com")).await.unwrap();
        let found = svc.get_by_id(d.id).await.unwrap().unwrap();
        assert_eq!(found.id, d.id);
        assert_eq!(found.email, "jane@example.com");
        assert!(svc.get_by_id(d.id + 100).await.unwrap().is_none());
        assert_eq!(svc.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_rejects_invalid_input() {
        let (_, svc) = setup();
        let err = svc.create(new_driver(" ", "jane@example.com")).await.unwrap_err();
        assert_eq!(err.code(), 1001);
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn name_and_email_lookup_honour_case_flag() {
        let (_, svc) = setup();
        svc.create(new_driver("jane", "JANE@Example.com")).await.unwrap();

        assert!(svc.get_by_name("Jane", false).await.unwrap().is_some());
        assert!(svc.get_by_name("JANE", false).await.unwrap().is_some());
        assert!(svc.get_by_name("Jane", true).await.unwrap().is_none());
        assert!(svc.get_by_name("jane", true).await.unwrap().is_some());

        assert!(svc.get_by_email("jane@example.com", false).await.unwrap().is_some());
        assert!(svc.get_by_email("jane@example.com", true).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_applies_truthy_text_and_supplied_flags() {
        let (_, svc) = setup();
        let d = svc.create(new_driver("Jane", "jane@example.com")).await.unwrap();

        let updated = svc.update(d.id, DriverPatch {
            name: Some(String::new()),
            availability: Some(false),
            vehicle_id: Some(None),
            address: Some("7 Hill St".into()),
            ..Default::default()
        }).await.unwrap();

        assert_eq!(updated.name, "Jane");
        assert!(!updated.availability);
        assert_eq!(updated.vehicle_id, None);
        assert_eq!(updated.address, "7 Hill St");
        assert_eq!(svc.get_by_id(d.id).await.unwrap().unwrap(), updated);
    }

    #[tokio::test]
    async fn update_and_delete_missing_driver_are_not_found() {
        let (_, svc) = setup();
        let err = svc.update(42, DriverPatch::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == DRIVER_NOT_FOUND));
        let err = svc.delete(42).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn delete_removes_driver() {
        let (_, svc) = setup();
        let d = svc.create(new_driver("Jane", "jane@example.com")).await.unwrap();
        svc.delete(d.id).await.unwrap();
        assert!(svc.get_by_id(d.id).await.unwrap().is_none());
        assert!(svc.delete(d.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn assigned_transports_require_driver_and_assignments() {
        let (repo, svc) = setup();
        let err = svc.get_assigned_transports(9).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == DRIVER_NOT_FOUND));

        let d = svc.create(new_driver("Jane", "jane@example.com")).await.unwrap();
        let err = svc.get_assigned_transports(d.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == NO_TRANSPORTS_ASSIGNED));

        let t = new_transport(&repo, "WP-1234").await;
        svc.assign_transport(d.id, t).await.unwrap();
        let assigned = svc.get_assigned_transports(d.id).await.unwrap();
        assert_eq!(assigned.driver.id, d.id);
        assert!(assigned.transports.iter().any(|x| x.id == t));
    }

    #[tokio::test]
    async fn assigning_twice_duplicates_and_unassign_removes_all() {
        let (repo, svc) = setup();
        let d = svc.create(new_driver("Jane", "jane@example.com")).await.unwrap();
        let t1 = new_transport(&repo, "WP-1").await;
        let t2 = new_transport(&repo, "WP-2").await;

        svc.assign_transport(d.id, t1).await.unwrap();
        svc.assign_transport(d.id, t2).await.unwrap();
        let after = svc.assign_transport(d.id, t1).await.unwrap();
        let ids: Vec<i32> = after.transports.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![t1, t2, t1]);

        let after = svc.unassign_transport(d.id, t1).await.unwrap();
        let ids: Vec<i32> = after.transports.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![t2]);
    }

    #[tokio::test]
    async fn assignment_checks_both_records() {
        let (repo, svc) = setup();
        let d = svc.create(new_driver("Jane", "jane@example.com")).await.unwrap();
        let t = new_transport(&repo, "WP-1").await;

        let err = svc.assign_transport(d.id + 1, t).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == DRIVER_NOT_FOUND));
        let err = svc.assign_transport(d.id, t + 1).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == TRANSPORT_NOT_FOUND));
        let err = svc.unassign_transport(d.id, t + 1).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m == TRANSPORT_NOT_FOUND));

        // unassigning a transport that was never assigned is not an error
        let after = svc.unassign_transport(d.id, t).await.unwrap();
        assert!(after.transports.is_empty());
    }

    #[tokio::test]
    async fn login_compares_plaintext_password() {
        let (_, svc) = setup();
        svc.create(new_driver("Jane", "jane@example.com")).await.unwrap();

        let ok = svc.login(DriverLogin { email: "jane@example.com".into(), password: "s3cret".into() }).await.unwrap();
        assert!(ok);
        let bad = svc.login(DriverLogin { email: "jane@example.com".into(), password: "S3CRET".into() }).await.unwrap();
        assert!(!bad);
        let err = svc.login(DriverLogin { email: "nobody@example.com".into(), password: "x".into() }).await.unwrap_err();
        assert!(err.is_not_found());
        // email match is exact for login
        let err = svc.login(DriverLogin { email: "JANE@example.com".into(), password: "s3cret".into() }).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
