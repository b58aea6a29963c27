//! 404 Not Found page

use dirview_core::routes::{default_details_url, SETTINGS_URL};
use leptos::prelude::*;

use crate::components::{ButtonLink, ButtonVariant};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-[60vh] flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-white mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-gray-300 mb-2">"Page Not Found"</h2>
                <p class="text-gray-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <div class="flex items-center justify-center space-x-4">
                    <ButtonLink href=SETTINGS_URL>"Go to Settings"</ButtonLink>
                    <ButtonLink href=default_details_url() variant=ButtonVariant::Ghost>
                        "View LDAP Settings"
                    </ButtonLink>
                </div>
            </div>
        </div>
    }
}
