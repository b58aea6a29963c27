//! API response types

use dirview_core::types::{decode_schema, Me, SettingsSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `OPTIONS /settings/all/`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SettingsOptions {
    #[serde(default)]
    pub actions: SettingsActions,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SettingsActions {
    /// Read-side schema, one raw entry per setting key
    #[serde(rename = "GET", default)]
    pub get: Map<String, Value>,
}

impl SettingsOptions {
    pub fn into_schema(self) -> SettingsSchema {
        decode_schema(self.actions.get)
    }
}

/// Body of `GET /me/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MeList {
    #[serde(default)]
    pub count: usize,
    pub results: Vec<Me>,
}

/// API error response
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for dirview_core::Error {
    fn from(err: ApiError) -> Self {
        dirview_core::Error::Fetch {
            code: err.code,
            message: err.message,
        }
    }
}
