//! Card layout pieces

use leptos::prelude::*;

#[component]
pub fn CardBody(children: Children) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-b-xl border border-t-0 border-gray-700 p-6 space-y-6">
            {children()}
        </div>
    }
}

/// Row of actions at the bottom of a card
#[component]
pub fn CardActionsRow(children: Children) -> impl IntoView {
    view! {
        <div class="flex items-center justify-start space-x-3 pt-4 border-t border-gray-700">
            {children()}
        </div>
    }
}
