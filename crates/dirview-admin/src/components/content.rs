//! Loading and error placeholders

use leptos::prelude::*;

#[component]
pub fn ContentLoading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center space-x-2 py-8" role="progressbar">
            <svg class="animate-spin h-5 w-5 text-blue-500" fill="none" viewBox="0 0 24 24">
                <circle class="opacity-25" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
                <path class="opacity-75" fill="currentColor" d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"></path>
            </svg>
            <span class="text-gray-400">"Loading..."</span>
        </div>
    }
}

/// Generic failure panel. The detail is shown small under the headline.
#[component]
pub fn ContentError(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-red-900/50 border border-red-500 text-red-200 px-4 py-6 rounded-lg text-center" role="alert">
            <p class="font-medium">"Something went wrong..."</p>
            <p class="text-sm mt-1">"There was an error loading this content. Please reload the page."</p>
            <p class="text-xs text-red-300/70 mt-3 font-mono">{message}</p>
        </div>
    }
}
