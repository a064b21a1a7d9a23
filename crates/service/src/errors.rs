use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Human-readable message without the variant prefix, suitable for API bodies.
    pub fn detail(&self) -> String {
        use models::errors::ModelError;
        match self {
            ServiceError::Validation(m)
            | ServiceError::Conflict(m)
            | ServiceError::NotFound(m)
            | ServiceError::Db(m) => m.clone(),
            ServiceError::Model(ModelError::Validation(m))
            | ServiceError::Model(ModelError::Conflict(m))
            | ServiceError::Model(ModelError::Db(m)) => m.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::errors::ModelError;

    #[test]
    fn not_found_message_names_entity() {
        let e = ServiceError::not_found("Customer");
        assert_eq!(e.detail(), "Customer not found");
        assert_eq!(e.to_string(), "not found: Customer not found");
    }

    #[test]
    fn model_errors_convert() {
        let e: ServiceError = ModelError::Validation("name must not be empty".into()).into();
        assert!(matches!(e, ServiceError::Model(ModelError::Validation(_))));
        assert_eq!(e.detail(), "name must not be empty");
    }
}
