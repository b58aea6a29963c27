//! Collapsible section

use leptos::prelude::*;

#[component]
pub fn ExpandableSection(
    toggle_text: &'static str,
    #[prop(into)] expanded: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="border border-gray-700 rounded-lg">
            <button
                type="button"
                class="w-full flex items-center px-4 py-3 text-left text-gray-300 hover:text-white hover:bg-gray-750 transition-colors rounded-lg"
                aria-expanded=move || expanded.get().to_string()
                on:click=move |_| on_toggle.run(())
            >
                <svg
                    class=move || {
                        let base = "w-4 h-4 mr-2 transition-transform";
                        if expanded.get() {
                            format!("{} rotate-90", base)
                        } else {
                            base.to_string()
                        }
                    }
                    fill="none" stroke="currentColor" viewBox="0 0 24 24"
                >
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7" />
                </svg>
                <span class="font-medium">{toggle_text}</span>
            </button>
            <div class="px-4 pb-4" class:hidden=move || !expanded.get()>
                {children()}
            </div>
        </section>
    }
}
