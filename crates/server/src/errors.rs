use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

use crate::metrics;

/// Transport-facing wrapper: every service failure becomes a fixed
/// status plus a JSON body with a stable `error` string.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ServiceError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::Persistence(_) | ServiceError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self.0 {
            ServiceError::MalformedInput(_) => "Invalid JSON format",
            ServiceError::Persistence(_) => "Database error",
            ServiceError::Serialization(_) => "JSON conversion error",
        }
    }

    fn log_context(&self) -> &'static str {
        match self.0 {
            ServiceError::MalformedInput(_) => "error processing JSON",
            ServiceError::Persistence(_) => "user store failure",
            ServiceError::Serialization(_) => "error converting users to JSON",
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

/// A body that cannot be buffered (over the size limit, aborted mid-stream)
/// is reported like any other unreadable input.
impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        Self(ServiceError::MalformedInput(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if matches!(self.0, ServiceError::Persistence(_)) {
            metrics::STORE_ERRORS_TOTAL.inc();
        }
        error!(code = self.0.code(), status = status.as_u16(), error = %self.0, "{}", self.log_context());
        (status, Json(ErrorBody::new(self.public_message()))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
}
