//! Tab bar whose tabs are console routes

use dirview_core::routes::{is_active_tab, Tab};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn RoutedTabs(tabs: Vec<Tab>) -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="flex bg-gray-900 rounded-t-xl border border-gray-700 overflow-x-auto">
            {tabs
                .into_iter()
                .map(|tab| {
                    let back = tab.is_back();
                    let active = {
                        let tab = tab.clone();
                        move || is_active_tab(&tab, &pathname.get())
                    };
                    view! {
                        <a
                            href=tab.link.clone()
                            class=move || {
                                let base = "flex items-center px-5 py-3 text-sm font-medium border-b-2 transition-colors whitespace-nowrap";
                                if active() {
                                    format!("{} border-blue-500 text-white", base)
                                } else {
                                    format!("{} border-transparent text-gray-400 hover:text-white", base)
                                }
                            }
                        >
                            {back.then(|| view! { <IconCaretLeft /> })}
                            {tab.name}
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
fn IconCaretLeft() -> impl IntoView {
    view! {
        <svg class="w-4 h-4 mr-1" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7" />
        </svg>
    }
}
