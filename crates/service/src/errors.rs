use thiserror::Error;

/// Failures reported by a [`UserStore`](crate::users::repository::UserStore),
/// independent of the backend behind it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("store connection failure: {0}")]
    ConnectionFailure(String),
    #[error("store constraint violation: {0}")]
    ConstraintViolation(String),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("persistence error: {0}")]
    Persistence(#[from] StoreError),
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ServiceError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::MalformedInput(_) => 1001,
            ServiceError::Persistence(StoreError::ConnectionFailure(_)) => 1200,
            ServiceError::Persistence(StoreError::ConstraintViolation(_)) => 1201,
            ServiceError::Serialization(_) => 1300,
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
