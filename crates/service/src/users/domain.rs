use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::ServiceError;

/// Opaque identifier assigned by the store when a record is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One user entry. Records are never mutated after they are persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub name: String,
}

/// Accepted shape of a create request body.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct NewUserPayload {
    name: String,
}

impl UserRecord {
    /// An unsaved record; the store fills in the id.
    pub fn new(name: impl Into<String>) -> Self {
        Self { id: None, name: name.into() }
    }

    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    /// Decode a create request body.
    ///
    /// Rejects anything that is not exactly the object `{"name": <string>}`
    /// with a non-empty name. The body must be a JSON object before it is
    /// bound, so a positional array like `["Ada"]` is malformed.
    pub fn decode(raw: &[u8]) -> Result<Self, ServiceError> {
        let object: Map<String, Value> = serde_json::from_slice(raw)
            .map_err(|e| ServiceError::MalformedInput(e.to_string()))?;
        let payload: NewUserPayload = serde_json::from_value(Value::Object(object))
            .map_err(|e| ServiceError::MalformedInput(e.to_string()))?;
        models::users::validate_name(&payload.name)
            .map_err(|e| ServiceError::MalformedInput(e.to_string()))?;
        Ok(Self::new(payload.name))
    }
}

impl From<models::users::Model> for UserRecord {
    fn from(m: models::users::Model) -> Self {
        Self { id: Some(UserId::from(m.id)), name: m.name }
    }
}
