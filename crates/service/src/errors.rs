use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 1003,
            ServiceError::Model(models::errors::ModelError::Validation(_)) => 1001,
            ServiceError::Db(_) | ServiceError::Model(models::errors::ModelError::Db(_)) => 1200,
        }
    }

    pub fn is_not_found(&self) -> bool { matches!(self, ServiceError::NotFound(_)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn codes_group_validation_and_storage_failures() {
        assert_eq!(ServiceError::not_found("Driver").code(), 1003);
        assert_eq!(ServiceError::from(ModelError::Validation("x".into())).code(), 1001);
        assert_eq!(ServiceError::from(ModelError::Db("x".into())).code(), 1200);
        assert_eq!(ServiceError::Db("x".into()).code(), 1200);
    }

    #[test]
    fn not_found_message() {
        let e = ServiceError::not_found("Driver");
        assert!(e.is_not_found());
        assert_eq!(e.to_string(), "not found: Driver not found");
    }
}
