//! Key-substring filtering of merged settings

use crate::types::SettingEntry;

/// Entries whose key contains `prefix`, in their original order.
pub fn filter_by_prefix(entries: &[SettingEntry], prefix: &str) -> Vec<SettingEntry> {
    entries
        .iter()
        .filter(|entry| entry.key.contains(prefix))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SettingField, SettingOption};
    use serde_json::json;

    fn entry(key: &str) -> SettingEntry {
        SettingEntry::new(
            key,
            SettingField::merge(&SettingOption::default(), json!(key.len()), false),
        )
    }

    fn keys(entries: &[SettingEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn test_keeps_only_matching_keys() {
        let entries = vec![
            entry("AUTH_LDAP_SERVER_URI"),
            entry("AUTH_LDAP_1_SERVER_URI"),
            entry("AUTH_LDAP_1_BIND_DN"),
            entry("AUTH_LDAP_2_SERVER_URI"),
        ];

        let filtered = filter_by_prefix(&entries, "AUTH_LDAP_1_");
        assert_eq!(keys(&filtered), vec!["AUTH_LDAP_1_SERVER_URI", "AUTH_LDAP_1_BIND_DN"]);
        assert_eq!(filtered[1].field.value, json!("AUTH_LDAP_1_BIND_DN".len()));
    }

    #[test]
    fn test_matches_anywhere_in_key() {
        let entries = vec![entry("SOCIAL_AUTH_LDAP_1_X"), entry("LDAP_1")];
        assert_eq!(keys(&filter_by_prefix(&entries, "AUTH_LDAP_1_")), vec!["SOCIAL_AUTH_LDAP_1_X"]);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(filter_by_prefix(&[], "AUTH_LDAP_1_").is_empty());

        let entries = vec![entry("A"), entry("B")];
        assert_eq!(filter_by_prefix(&entries, "").len(), 2);
        assert!(filter_by_prefix(&entries, "C").is_empty());
    }
}
