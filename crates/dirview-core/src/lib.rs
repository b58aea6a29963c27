//! Dirview Core Library
//!
//! Domain types and pure logic behind the LDAP settings detail console:
//! bucket classification, schema merge, display ordering, the load state
//! machine and the view model the web crate renders.

pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod routes;
pub mod state;
pub mod types;
pub mod utils;

pub use config::ConsoleConfig;
pub use error::{Error, Result};
pub use loader::{build_load_result, load, SettingsSource};
pub use state::{DetailView, LoadState};

/// Dirview version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings category holding the LDAP authentication fields
pub const LDAP_CATEGORY: &str = "ldap";

/// Key fragment marking low-level connection options
pub const CONNECTION_OPTIONS_MARKER: &str = "_CONNECTION_OPTIONS";
