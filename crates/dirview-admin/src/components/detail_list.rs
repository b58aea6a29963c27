//! Read-only setting rows

use dirview_core::types::SettingEntry;
use dirview_core::utils::{display_value, DisplayValue};
use leptos::prelude::*;

#[component]
pub fn DetailList(children: Children) -> impl IntoView {
    view! {
        <dl class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4">
            {children()}
        </dl>
    }
}

/// Detail rows for a list of settings, or a note when there are none.
#[component]
pub fn SettingDetails(entries: Vec<SettingEntry>) -> impl IntoView {
    if entries.is_empty() {
        return view! {
            <p class="text-sm text-gray-500">"No settings configured."</p>
        }
        .into_any();
    }

    view! {
        <DetailList>
            {entries
                .into_iter()
                .map(|entry| view! { <SettingDetail entry=entry /> })
                .collect_view()}
        </DetailList>
    }
    .into_any()
}

#[component]
pub fn SettingDetail(entry: SettingEntry) -> impl IntoView {
    let SettingEntry { key, field } = entry;
    let shown = display_value(&field);
    let wide = matches!(shown, DisplayValue::Code(_));

    let value = match shown {
        DisplayValue::Empty => view! { <span class="text-gray-500">"—"</span> }.into_any(),
        DisplayValue::Toggle(on) => view! {
            <span class=if on { "text-green-400" } else { "text-gray-400" }>
                {if on { "On" } else { "Off" }}
            </span>
        }
        .into_any(),
        DisplayValue::Text(text) => view! { <span class="text-white break-all">{text}</span> }.into_any(),
        DisplayValue::Code(code) => view! {
            <pre class="bg-gray-900 border border-gray-700 rounded-lg p-3 text-sm text-gray-200 font-mono overflow-x-auto">
                {code}
            </pre>
        }
        .into_any(),
    };

    view! {
        <div
            id=key.clone()
            data-setting=key
            class=if wide { "p-3 bg-gray-750 rounded-lg md:col-span-2 xl:col-span-3" } else { "p-3 bg-gray-750 rounded-lg" }
        >
            <dt class="flex items-center text-sm text-gray-400">
                {field.label}
                {field.help_text.map(|help| view! {
                    <span class="ml-2 cursor-help text-gray-500" title=help>"ⓘ"</span>
                })}
            </dt>
            <dd class="mt-1 font-medium">{value}</dd>
        </div>
    }
}
