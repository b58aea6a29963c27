//! Settings page

use dirview_core::routes::details_url;
use dirview_core::types::BucketId;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::context::use_console;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_console();
    let (api_url, log_level) = ctx
        .config
        .with_value(|c| (c.api.base_url.clone(), c.logging.effective_level().to_string()));

    let schema_status = move || match ctx.schema.get() {
        None => "Loading...".to_string(),
        Some(Ok(schema)) => format!("{} settings", schema.len()),
        Some(Err(e)) => format!("Unavailable ({})", e.code),
    };

    view! {
        <Title text="Settings" />
        <div class="space-y-6">
            // Page header
            <div>
                <h1 class="text-2xl font-bold text-white">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Authentication and console configuration"</p>
            </div>

            <div class="space-y-6">
                <SettingsCard title="Authentication" description="Directory servers used to sign users in">
                    <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                        {BucketId::ALL
                            .into_iter()
                            .map(|bucket| view! {
                                <a
                                    href=details_url(bucket)
                                    class="p-3 bg-gray-750 rounded-lg hover:bg-gray-700 transition-colors"
                                >
                                    <p class="text-sm text-gray-400">"LDAP"</p>
                                    <p class="text-white font-medium">{bucket.label()}</p>
                                </a>
                            })
                            .collect_view()}
                    </div>
                </SettingsCard>

                <SettingsCard title="Console" description="Where this console reads its settings from">
                    <div class="grid grid-cols-2 gap-4">
                        <SettingItem label="API Endpoint" value=api_url />
                        <SettingItem label="Log Level" value=log_level />
                        <div class="p-3 bg-gray-750 rounded-lg">
                            <p class="text-sm text-gray-400">"Settings Schema"</p>
                            <p class="text-white font-medium">{schema_status}</p>
                        </div>
                        <SettingItem label="Version" value=dirview_core::VERSION.to_string() />
                    </div>
                </SettingsCard>
            </div>
        </div>
    }
}

#[component]
fn SettingsCard(title: &'static str, description: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 p-6">
            <div class="mb-4">
                <h2 class="text-lg font-semibold text-white">{title}</h2>
                <p class="text-sm text-gray-400">{description}</p>
            </div>
            {children()}
        </div>
    }
}

#[component]
fn SettingItem(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="p-3 bg-gray-750 rounded-lg">
            <p class="text-sm text-gray-400">{label}</p>
            <p class="text-white font-medium">{value}</p>
        </div>
    }
}
