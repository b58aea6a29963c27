//! Error types for Dirview

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // Backend Errors
    #[error("Failed to read settings ({code}): {message}")]
    Fetch { code: String, message: String },

    // Data Errors
    #[error("No schema entry for setting: {0}")]
    MissingSchemaEntry(String),

    // Routing Errors
    #[error("Unknown LDAP settings category: {0}")]
    InvalidCategory(String),

    // Configuration Errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn fetch(code: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Fetch {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Error::Fetch { code, .. } => code,
            Error::MissingSchemaEntry(_) => "MissingSchemaEntry",
            Error::InvalidCategory(_) => "InvalidCategory",
            Error::Config(_) => "InvalidConfiguration",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_keeps_backend_code() {
        let err = Error::fetch("HTTP403", "Forbidden");
        assert_eq!(err.code(), "HTTP403");
        assert_eq!(err.to_string(), "Failed to read settings (HTTP403): Forbidden");
    }

    #[test]
    fn test_missing_schema_entry_names_key() {
        let err = Error::MissingSchemaEntry("AUTH_LDAP_9_FOO".into());
        assert_eq!(err.code(), "MissingSchemaEntry");
        assert_eq!(err.to_string(), "No schema entry for setting: AUTH_LDAP_9_FOO");
    }
}
