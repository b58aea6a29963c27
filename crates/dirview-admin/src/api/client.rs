//! API client implementation
//!
//! Makes HTTP requests to the console's settings API.

use super::types::*;
use async_trait::async_trait;
use dirview_core::config::{ApiConfig, ConsoleConfig};
use dirview_core::types::{Me, SettingsSchema};
use dirview_core::SettingsSource;
use gloo_net::http::{Method, Request, RequestBuilder};
use serde_json::{Map, Value};
use web_sys::window;

const ACCESS_KEY: &str = "dirview_access_key";
const SECRET_KEY: &str = "dirview_secret_key";

/// Configuration file compiled into the console
const BUNDLED_CONFIG: &str = include_str!("../../console.toml");

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Bundled configuration with local storage overrides applied
pub fn load_config() -> dirview_core::Result<ConsoleConfig> {
    let config = ConsoleConfig::from_toml_str(BUNDLED_CONFIG)?;
    Ok(config.with_overrides(|key| local_storage()?.get_item(key).ok()?))
}

/// Drop stored credentials
pub fn clear_credentials() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_KEY);
        let _ = storage.remove_item(SECRET_KEY);
    }
}

/// Get credentials from localStorage
fn get_auth_header() -> Option<String> {
    let storage = local_storage()?;
    let access_key = storage.get_item(ACCESS_KEY).ok()??;
    let secret_key = storage.get_item(SECRET_KEY).ok()??;

    // Use Basic auth: base64(access_key:secret_key)
    let credentials = format!("{}:{}", access_key, secret_key);
    let encoded = window()?.btoa(&credentials).ok()?;
    Some(format!("Basic {}", encoded))
}

/// Send a request and decode the JSON body
async fn send<T: serde::de::DeserializeOwned>(mut request: RequestBuilder) -> Result<T, ApiError> {
    request = request.header("Accept", "application/json");
    if let Some(auth) = get_auth_header() {
        request = request.header("Authorization", &auth);
    }

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::new("NetworkError", e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(ApiError {
            code: format!("HTTP{}", status),
            message: if text.is_empty() {
                format!("Request failed with status {}", status)
            } else {
                text
            },
        });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::new("ParseError", e.to_string()))
}

/// Make authenticated GET request
async fn get<T: serde::de::DeserializeOwned>(api: &ApiConfig, endpoint: &str) -> Result<T, ApiError> {
    send(Request::get(&api.url(endpoint))).await
}

/// Make authenticated OPTIONS request
async fn options<T: serde::de::DeserializeOwned>(api: &ApiConfig, endpoint: &str) -> Result<T, ApiError> {
    send(RequestBuilder::new(&api.url(endpoint)).method(Method::OPTIONS)).await
}

// ============= Settings API =============

/// Read the current values of one settings category
pub async fn read_category(api: &ApiConfig, category: &str) -> Result<Map<String, Value>, ApiError> {
    get(api, &format!("/settings/{}/", category)).await
}

/// Read the schema of every setting
pub async fn read_all_options(api: &ApiConfig) -> Result<SettingsSchema, ApiError> {
    let body: SettingsOptions = options(api, "/settings/all/").await?;
    Ok(body.into_schema())
}

// ============= User API =============

/// Get the signed-in user
pub async fn read_me(api: &ApiConfig) -> Result<Me, ApiError> {
    let list: MeList = get(api, "/me/").await?;
    list.results.into_iter().next().ok_or_else(|| ApiError {
        code: "NoData".to_string(),
        message: "No user returned".to_string(),
    })
}

/// Settings source backed by the HTTP API
#[derive(Debug, Clone)]
pub struct HttpSettingsSource {
    api: ApiConfig,
}

impl HttpSettingsSource {
    pub fn new(api: ApiConfig) -> Self {
        Self { api }
    }
}

#[async_trait(?Send)]
impl SettingsSource for HttpSettingsSource {
    async fn read_category(&self, category: &str) -> dirview_core::Result<Map<String, Value>> {
        read_category(&self.api, category).await.map_err(Into::into)
    }
}
