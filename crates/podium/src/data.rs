//! Data structures exchanged between the Podium frontend, its backend and the
//! object-storage service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The uid the backend and the frontend use for "checked, not signed in".
pub const ANONYMOUS_UID: &str = "UNDEFINED";

/// The probe message that marks the backend as reachable.
pub const CONNECTED_MESSAGE: &str = "connected";

/// Request header carrying the identity provider's user object.
pub const USER_DATA_HEADER: &str = "x-user-data";

/// Body of `GET /`, the backend liveness probe.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub message: String,
}

impl ProbeResponse {
    pub fn connected() -> Self {
        Self {
            message: CONNECTED_MESSAGE.to_string(),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.message == CONNECTED_MESSAGE
    }
}

/// The application's user record, as returned by `GET /getUser`.
///
/// Only `uid` is interpreted; every other field the backend sends is kept in
/// `profile` and written back out unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppUser {
    pub uid: String,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl AppUser {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            profile: Map::new(),
        }
    }

    /// The sentinel user, `{"uid": "UNDEFINED"}`.
    pub fn anonymous() -> Self {
        Self::new(ANONYMOUS_UID)
    }

    pub fn is_anonymous(&self) -> bool {
        self.uid == ANONYMOUS_UID
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.profile.insert(key.into(), value.into());
        self
    }

    /// Replace `displayName` with the trimmed `name`; a blank name removes it.
    pub fn with_display_name(mut self, name: &str) -> Self {
        let name = name.trim();
        if name.is_empty() {
            self.profile.remove("displayName");
            self
        } else {
            self.with_field("displayName", name)
        }
    }

    pub fn field(&self, key: &str) -> Option<&str> {
        self.profile.get(key).and_then(Value::as_str)
    }

    /// Best-effort human name: `displayName`, then `name`, then `email`.
    pub fn display_name(&self) -> Option<&str> {
        ["displayName", "name", "email"]
            .into_iter()
            .find_map(|key| self.field(key))
    }
}

/// Body of `GET /getUser`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GetUserResponse {
    pub user: AppUser,
}

/// The identity provider's user object, kept as raw JSON so it can be
/// forwarded to the backend exactly as the provider produced it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct IdentityUser(Value);

impl IdentityUser {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self)
    }

    pub fn uid(&self) -> Option<&str> {
        self.0.get("uid").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The value sent in the [`USER_DATA_HEADER`] request header.
    pub fn to_header_value(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }
}

/// An opaque reference to the presentation a page is working on.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct Presentation(Value);

impl Presentation {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

/// File metadata returned by the object-storage service after an upload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "bucketId")]
    pub bucket_id: String,
    pub name: String,
    #[serde(rename = "mimeType", default)]
    pub mime_type: String,
    #[serde(rename = "sizeOriginal", default)]
    pub size: u64,
}

/// Health check response of the development backend.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub started_at: String,
    pub uptime: UptimeInfo,
    pub services: ServiceInfo,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceInfo {
    pub users: String,
    pub known_users: usize,
}
