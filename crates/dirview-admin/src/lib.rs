//! Dirview Admin UI
//!
//! A Leptos-based web console showing the LDAP authentication settings of
//! every configured directory server.

pub mod api;
pub mod app;
pub mod components;
pub mod context;
pub mod pages;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use dirview_core::ConsoleConfig;

use crate::app::App;

/// Initialize and mount the Leptos application
#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    let (config, config_error) = match api::load_config() {
        Ok(config) => (config, None),
        Err(e) => (ConsoleConfig::default(), Some(e)),
    };

    let level = config
        .logging
        .effective_level()
        .parse::<log::Level>()
        .unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);

    if let Some(e) = config_error {
        log::error!("{}, falling back to defaults", e);
    }

    log::info!(
        "Dirview console {} starting, API at {}",
        dirview_core::VERSION,
        config.api.base_url
    );

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
