//! Page components

mod ldap;
mod not_found;
mod settings;

pub use ldap::{LdapDetailPage, ReadyBody};
pub use not_found::NotFoundPage;
pub use settings::SettingsPage;
