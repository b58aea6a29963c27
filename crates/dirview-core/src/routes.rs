//! Console URLs and the LDAP tab bar

use crate::types::BucketId;

/// Settings landing page
pub const SETTINGS_URL: &str = "/settings";

/// Root of the LDAP settings screens
pub const LDAP_BASE_URL: &str = "/settings/ldap";

/// Route parameter selecting the displayed bucket
pub const CATEGORY_PARAM: &str = "category";

/// Id of the back-to-settings tab
pub const BACK_TAB_ID: u8 = 99;

pub fn details_url(bucket: BucketId) -> String {
    format!("{}/{}/details", LDAP_BASE_URL, bucket.as_route())
}

pub fn edit_url(bucket: BucketId) -> String {
    format!("{}/{}/edit", LDAP_BASE_URL, bucket.as_route())
}

/// Where an unknown category is sent.
pub fn default_details_url() -> String {
    details_url(BucketId::Default)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: u8,
    pub name: &'static str,
    pub link: String,
}

impl Tab {
    pub fn is_back(&self) -> bool {
        self.id == BACK_TAB_ID
    }
}

/// Back link followed by one tab per bucket.
pub fn ldap_tabs() -> Vec<Tab> {
    let mut tabs = vec![Tab {
        id: BACK_TAB_ID,
        name: "Back to Settings",
        link: SETTINGS_URL.to_string(),
    }];
    tabs.extend(BucketId::ALL.into_iter().map(|bucket| Tab {
        id: bucket.number().unwrap_or(0),
        name: bucket.label(),
        link: details_url(bucket),
    }));
    tabs
}

/// Whether `tab` is the one for the current location.
pub fn is_active_tab(tab: &Tab, pathname: &str) -> bool {
    !tab.is_back() && pathname.trim_end_matches('/') == tab.link
}
