//! LDAP settings detail page

use dirview_core::routes::{ldap_tabs, CATEGORY_PARAM};
use dirview_core::state::{AdvancedSection, ReadyView};
use dirview_core::{load, DetailView, LoadState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_params_map;

use crate::api::HttpSettingsSource;
use crate::components::{
    ButtonLink, CardActionsRow, CardBody, ContentError, ContentLoading, ExpandableSection,
    RoutedTabs, SettingDetails,
};
use crate::context::use_console;

#[component]
pub fn LdapDetailPage() -> impl IntoView {
    let ctx = use_console();
    let params = use_params_map();
    let state = RwSignal::new(LoadState::Idle);

    // Runs once the schema is known; `begin` only succeeds from Idle, so route
    // changes never refetch.
    Effect::new(move |_| {
        let Some(schema) = ctx.schema.get() else {
            return;
        };
        let mut started = false;
        state.update(|s| started = s.begin());
        if !started {
            return;
        }

        match schema {
            Err(e) => state.update(|s| s.resolve(Err(e.into()))),
            Ok(schema) => {
                let (api, view_config) = ctx.config.with_value(|c| (c.api.clone(), c.ldap.clone()));
                spawn_local(async move {
                    let source = HttpSettingsSource::new(api);
                    let outcome = load(&source, &schema, &view_config).await;
                    state.update(|s| s.resolve(outcome));
                });
            }
        }
    });

    let detail = Memo::new(move |_| {
        let category = params.with(|p| p.get(CATEGORY_PARAM));
        let me = ctx.me.get();
        state.with(|s| DetailView::build(s, category.as_deref(), me.as_ref()))
    });

    let toggle_advanced = Callback::new(move |_: ()| state.update(LoadState::toggle_advanced));

    view! {
        <Title text="LDAP Settings" />
        {move || match detail.get() {
            DetailView::Redirect(url) => {
                log::info!("Redirecting unknown LDAP category to {}", url);
                view! { <Redirect path=url /> }.into_any()
            }
            other => view! {
                <div class="space-y-0">
                    <RoutedTabs tabs=ldap_tabs() />
                    <CardBody>
                        <DetailBody detail=other on_toggle=toggle_advanced />
                    </CardBody>
                </div>
            }
            .into_any(),
        }}
    }
}

#[component]
fn DetailBody(detail: DetailView, on_toggle: Callback<()>) -> impl IntoView {
    match detail {
        DetailView::Loading => view! { <ContentLoading /> }.into_any(),
        DetailView::Error(message) => view! { <ContentError message=message /> }.into_any(),
        DetailView::Ready(ready) => view! { <ReadyBody ready=ready on_toggle=on_toggle /> }.into_any(),
        DetailView::Redirect(_) => ().into_any(),
    }
}

/// Loaded bucket: basic fields, then the superuser-only advanced section and
/// edit button when the view carries them.
#[component]
pub fn ReadyBody(ready: ReadyView, on_toggle: Callback<()>) -> impl IntoView {
    let ReadyView {
        fields,
        advanced,
        edit_url,
        ..
    } = ready;

    view! {
        <SettingDetails entries=fields />
        {advanced.map(|AdvancedSection { expanded, fields }| view! {
            <ExpandableSection
                toggle_text="Advanced Settings"
                expanded=Signal::stored(expanded)
                on_toggle=on_toggle
            >
                <SettingDetails entries=fields />
            </ExpandableSection>
        })}
        {edit_url.map(|href| view! {
            <CardActionsRow>
                <ButtonLink href=href aria_label="Edit">"Edit"</ButtonLink>
            </CardActionsRow>
        })}
    }
}
