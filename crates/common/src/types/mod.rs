use serde::{Deserialize, Serialize};

/// Exact body returned by the liveness endpoint.
pub const LIVENESS_BODY: &str = r#"{"response":"I'm alive!"}"#;

/// Uniform error payload: every failure response carries a stable `error` string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
