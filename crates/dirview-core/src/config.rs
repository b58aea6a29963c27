//! Configuration for Dirview

use serde::{Deserialize, Serialize};

/// Local storage / override key for the API base URL
pub const API_URL_KEY: &str = "dirview_api_url";

/// Local storage / override key for the console log level
pub const LOG_LEVEL_KEY: &str = "dirview_log_level";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub ldap: LdapViewConfig,
}

impl ConsoleConfig {
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key/value source (browser local storage,
    /// process environment, ...).
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_KEY) {
            let url = url.trim();
            if !url.is_empty() {
                self.api.base_url = url.to_string();
            }
        }
        if let Some(level) = lookup(LOG_LEVEL_KEY) {
            self.logging.level = level.trim().to_lowercase();
        }
        self
    }

    pub fn validate(&self) -> crate::Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(crate::Error::Config("api.base_url must not be empty".into()));
        }
        if self.ldap.advanced_marker.is_empty() {
            return Err(crate::Error::Config(
                "ldap.advanced_marker must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "/api/v2".to_string(),
        }
    }
}

impl ApiConfig {
    /// Join an endpoint onto the base URL without doubling slashes.
    pub fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Level name normalised to one the log backends accept.
    pub fn effective_level(&self) -> &str {
        match self.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => &self.level,
            _ => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LdapViewConfig {
    /// Key fragment that moves a field into the advanced section
    pub advanced_marker: String,
}

impl Default for LdapViewConfig {
    fn default() -> Self {
        Self {
            advanced_marker: crate::CONNECTION_OPTIONS_MARKER.to_string(),
        }
    }
}
