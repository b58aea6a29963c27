//! Main application component with routing

use dirview_core::routes::{default_details_url, SETTINGS_URL};
use dirview_core::ConsoleConfig;
use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::{Header, Sidebar};
use crate::context::provide_console_context;
use crate::pages::{LdapDetailPage, NotFoundPage, SettingsPage};

/// Root application component
#[component]
pub fn App(config: ConsoleConfig) -> impl IntoView {
    provide_meta_context();
    provide_console_context(config);

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-gray-100">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <ParentRoute path=path!("") view=MainLayout>
                        <Route path=path!("") view=|| view! { <Redirect path=SETTINGS_URL /> } />
                        <Route path=path!("settings") view=SettingsPage />
                        <Route
                            path=path!("settings/ldap")
                            view=|| view! { <Redirect path=default_details_url() /> }
                        />
                        <Route path=path!("settings/ldap/:category/details") view=LdapDetailPage />
                    </ParentRoute>
                </Routes>
            </div>
        </Router>
    }
}

/// Main layout with sidebar and header
#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <div class="flex h-screen">
            <Sidebar />
            <div class="flex-1 flex flex-col overflow-hidden">
                <Header />
                <main class="flex-1 overflow-y-auto p-6 bg-gray-800">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
