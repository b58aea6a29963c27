//! Console-wide context: configuration, signed-in user and settings schema

use std::sync::Arc;

use dirview_core::types::{Me, SettingsSchema};
use dirview_core::ConsoleConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, types::ApiError};

/// Schema fetch outcome shared by every settings page
pub type SchemaState = Option<Result<Arc<SettingsSchema>, ApiError>>;

#[derive(Clone, Copy)]
pub struct ConsoleContext {
    pub config: StoredValue<ConsoleConfig>,
    /// `None` until `/me/` answers, and when it fails
    pub me: RwSignal<Option<Me>>,
    pub schema: RwSignal<SchemaState>,
}

impl ConsoleContext {
    pub fn is_superuser(&self) -> bool {
        self.me.with(|me| dirview_core::types::is_superuser(me.as_ref()))
    }
}

/// Fetch the user and the settings schema once and expose them to the tree.
pub fn provide_console_context(config: ConsoleConfig) -> ConsoleContext {
    let ctx = ConsoleContext {
        config: StoredValue::new(config),
        me: RwSignal::new(None),
        schema: RwSignal::new(None),
    };

    let api_config = ctx.config.with_value(|c| c.api.clone());
    spawn_local(async move {
        match api::read_me(&api_config).await {
            Ok(me) => {
                log::debug!("Signed in as {} (superuser: {})", me.username, me.is_superuser);
                ctx.me.set(Some(me));
            }
            Err(e) => log::warn!("Could not load current user: {}", e),
        }
    });

    let api_config = ctx.config.with_value(|c| c.api.clone());
    spawn_local(async move {
        let schema = api::read_all_options(&api_config).await.map(Arc::new);
        match &schema {
            Ok(s) => log::debug!("Loaded schema for {} settings", s.len()),
            Err(e) => log::error!("Could not load settings schema: {}", e),
        }
        ctx.schema.set(Some(schema));
    });

    provide_context(ctx);
    ctx
}

pub fn use_console() -> ConsoleContext {
    expect_context::<ConsoleContext>()
}
