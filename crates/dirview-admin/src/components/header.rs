//! Header component with the user menu

use leptos::prelude::*;

use crate::api;
use crate::context::use_console;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_console();
    let (show_user_menu, set_show_user_menu) = signal(false);

    let display_name = move || {
        ctx.me
            .with(|me| me.as_ref().map(|m| m.display_name()))
            .unwrap_or_else(|| "Signed out".to_string())
    };
    let initial = move || {
        ctx.me
            .with(|me| me.as_ref().map(|m| m.initial()))
            .unwrap_or_else(|| "?".to_string())
    };

    let on_logout = move |_: leptos::ev::MouseEvent| {
        api::clear_credentials();
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/");
        }
    };

    view! {
        <header class="h-16 bg-gray-900 border-b border-gray-700 flex items-center justify-between px-6">
            <h1 class="text-lg font-semibold text-white">"Settings"</h1>

            <div class="relative">
                <button
                    class="flex items-center space-x-3 p-2 rounded-lg hover:bg-gray-800 transition-colors"
                    on:click=move |_| set_show_user_menu.update(|v| *v = !*v)
                >
                    <div class="w-8 h-8 bg-blue-600 rounded-full flex items-center justify-center">
                        <span class="text-sm font-medium text-white">{initial}</span>
                    </div>
                    <span class="text-sm text-gray-300">{display_name}</span>
                    {move || ctx.is_superuser().then(|| view! {
                        <span class="text-xs px-2 py-0.5 rounded bg-blue-900/60 text-blue-200">"Superuser"</span>
                    })}
                    <svg class="w-4 h-4 text-gray-400" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 9l-7 7-7-7" />
                    </svg>
                </button>

                {move || show_user_menu.get().then(|| view! {
                    <div class="absolute right-0 mt-2 w-48 bg-gray-800 rounded-lg shadow-lg border border-gray-700 py-1 z-50">
                        <a href="/settings" class="block px-4 py-2 text-sm text-gray-300 hover:bg-gray-700">
                            "Settings"
                        </a>
                        <hr class="my-1 border-gray-700" />
                        <button
                            class="block w-full text-left px-4 py-2 text-sm text-red-400 hover:bg-gray-700"
                            on:click=on_logout
                        >
                            "Sign Out"
                        </button>
                    </div>
                })}
            </div>
        </header>
    }
}
