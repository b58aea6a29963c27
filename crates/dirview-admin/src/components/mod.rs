//! Reusable UI components

mod button;
mod card;
mod content;
mod detail_list;
mod expandable;
mod header;
mod routed_tabs;
mod sidebar;

pub use button::{ButtonLink, ButtonVariant};
pub use card::{CardActionsRow, CardBody};
pub use content::{ContentError, ContentLoading};
pub use detail_list::{DetailList, SettingDetail, SettingDetails};
pub use expandable::ExpandableSection;
pub use header::Header;
pub use routed_tabs::RoutedTabs;
pub use sidebar::Sidebar;
