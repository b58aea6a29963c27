//! Sidebar navigation component

use dirview_core::routes::{default_details_url, LDAP_BASE_URL, SETTINGS_URL};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    let ldap_active = Signal::derive(move || pathname.get().starts_with(LDAP_BASE_URL));
    let settings_active = Signal::derive(move || {
        let current = pathname.get();
        current.starts_with(SETTINGS_URL) && !current.starts_with(LDAP_BASE_URL)
    });

    view! {
        <aside class="w-64 bg-gray-900 border-r border-gray-700 flex flex-col">
            // Logo
            <div class="h-16 flex items-center px-6 border-b border-gray-700">
                <a href=SETTINGS_URL class="flex items-center space-x-3">
                    <svg class="w-8 h-8 text-blue-500" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                            d="M5 12h14M5 12a2 2 0 01-2-2V6a2 2 0 012-2h14a2 2 0 012 2v4a2 2 0 01-2 2M5 12a2 2 0 00-2 2v4a2 2 0 002 2h14a2 2 0 002-2v-4a2 2 0 00-2-2" />
                    </svg>
                    <span class="text-xl font-bold text-white">"Dirview"</span>
                </a>
            </div>

            // Navigation
            <nav class="flex-1 px-4 py-6 space-y-2">
                <NavItem
                    href=SETTINGS_URL.to_string()
                    icon=icon_settings
                    label="Settings"
                    active=settings_active
                />
                <NavItem
                    href=default_details_url()
                    icon=icon_directory
                    label="LDAP"
                    active=ldap_active
                />
            </nav>

            // Version info
            <div class="px-6 py-4 border-t border-gray-700">
                <div class="text-xs text-gray-500">
                    <div>{format!("Dirview v{}", dirview_core::VERSION)}</div>
                </div>
            </div>
        </aside>
    }
}

#[component]
fn NavItem(
    href: String,
    icon: fn() -> AnyView,
    label: &'static str,
    active: Signal<bool>,
) -> impl IntoView {
    view! {
        <a
            href=href
            class=move || {
                let base = "flex items-center px-4 py-3 rounded-lg transition-colors";
                if active.get() {
                    format!("{} bg-blue-600 text-white", base)
                } else {
                    format!("{} text-gray-400 hover:bg-gray-800 hover:text-white", base)
                }
            }
        >
            {icon()}
            <span class="ml-3">{label}</span>
        </a>
    }
}

fn icon_settings() -> AnyView {
    view! {
        <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                d="M10.325 4.317c.426-1.756 2.924-1.756 3.35 0a1.724 1.724 0 002.573 1.066c1.543-.94 3.31.826 2.37 2.37a1.724 1.724 0 001.065 2.572c1.756.426 1.756 2.924 0 3.35a1.724 1.724 0 00-1.066 2.573c.94 1.543-.826 3.31-2.37 2.37a1.724 1.724 0 00-2.572 1.065c-.426 1.756-2.924 1.756-3.35 0a1.724 1.724 0 00-2.573-1.066c-1.543.94-3.31-.826-2.37-2.37a1.724 1.724 0 00-1.065-2.572c-1.756-.426-1.756-2.924 0-3.35a1.724 1.724 0 001.066-2.573c-.94-1.543.826-3.31 2.37-2.37.996.608 2.296.07 2.572-1.065z" />
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 12a3 3 0 11-6 0 3 3 0 016 0z" />
        </svg>
    }
    .into_any()
}

fn icon_directory() -> AnyView {
    view! {
        <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                d="M12 4.354a4 4 0 110 5.292M15 21H3v-1a6 6 0 0112 0v1zm0 0h6v-1a6 6 0 00-9-5.197M13 7a4 4 0 11-8 0 4 4 0 018 0z" />
        </svg>
    }
    .into_any()
}
