//! Button styles and link buttons

use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            Self::Primary => "bg-blue-600 hover:bg-blue-700 text-white",
            Self::Ghost => "bg-transparent hover:bg-gray-700 text-gray-300",
        }
    }
}

const BASE_CLASS: &str = "px-4 py-2 rounded-lg font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-gray-800 focus:ring-blue-500 flex items-center justify-center";

/// Button-styled link that navigates inside the console
#[component]
pub fn ButtonLink(
    #[prop(into)] href: String,
    #[prop(into, optional)] variant: Option<ButtonVariant>,
    #[prop(optional)] aria_label: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let variant = variant.unwrap_or_default();

    view! {
        <a
            href=href
            class=format!("{} {} inline-flex", BASE_CLASS, variant.class())
            aria-label=aria_label
        >
            {children()}
        </a>
    }
}
