//! LDAP detail loader
//!
//! Reads the LDAP settings category once, merges every value with its schema
//! entry, and groups the merged fields into the six server buckets in display
//! order.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::config::LdapViewConfig;
use crate::filter::filter_by_prefix;
use crate::types::{
    classify, BucketId, LoadResult, SettingEntry, SettingField, SettingOption, SettingsSchema,
};
use crate::{Error, Result, LDAP_CATEGORY};

/// Backend that can read one settings category as a flat key/value map.
#[async_trait(?Send)]
pub trait SettingsSource {
    async fn read_category(&self, category: &str) -> Result<Map<String, Value>>;
}

/// Merged fields plus one [`Error::MissingSchemaEntry`] per key the schema
/// did not describe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeOutcome {
    pub entries: Vec<SettingEntry>,
    pub missing: Vec<Error>,
}

/// Build one immutable field per fetched key. Keys unknown to the schema get a
/// placeholder entry so they stay visible.
pub fn merge(values: &Map<String, Value>, schema: &SettingsSchema, advanced_marker: &str) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();

    for (key, value) in values {
        let is_advanced = key.contains(advanced_marker);
        let field = match schema.get(key) {
            Some(option) => SettingField::merge(option, value.clone(), is_advanced),
            None => {
                let err = Error::MissingSchemaEntry(key.clone());
                tracing::warn!(error = %err, "Using fallback schema entry");
                outcome.missing.push(err);
                SettingField::merge(&SettingOption::fallback(key, value), value.clone(), is_advanced)
            }
        };
        outcome.entries.push(SettingEntry::new(key.clone(), field));
    }

    outcome
}

/// Scalar fields first, nested ones (objects, lists, certificates) last.
/// Relative order inside each group is kept.
pub fn sort_nested_details(entries: Vec<SettingEntry>) -> Vec<SettingEntry> {
    let (nested, mut flat): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .partition(|entry| entry.field.field_type.is_nested());
    flat.extend(nested);
    flat
}

/// Split merged fields into the six buckets, each in display order.
pub fn partition(merged: &[SettingEntry]) -> LoadResult {
    let mut result = LoadResult::unloaded();

    for bucket in BucketId::NUMBERED {
        let Some(prefix) = bucket.prefix() else {
            continue;
        };
        let members: Vec<SettingEntry> = filter_by_prefix(merged, prefix)
            .into_iter()
            .filter(|entry| classify(&entry.key) == bucket)
            .collect();
        result.insert(bucket, sort_nested_details(members));
    }

    let shared: Vec<SettingEntry> = merged
        .iter()
        .filter(|entry| classify(&entry.key) == BucketId::Default)
        .cloned()
        .collect();
    result.insert(BucketId::Default, sort_nested_details(shared));

    result
}

/// Merge fetched values with the schema and group them per bucket.
pub fn build_load_result(
    values: &Map<String, Value>,
    schema: &SettingsSchema,
    view: &LdapViewConfig,
) -> LoadResult {
    let outcome = merge(values, schema, &view.advanced_marker);
    if !outcome.missing.is_empty() {
        tracing::warn!(
            count = outcome.missing.len(),
            "LDAP settings without schema entries"
        );
    }

    let result = partition(&outcome.entries);
    for (bucket, fields) in result.iter() {
        tracing::debug!(bucket = %bucket, fields = fields.len(), "bucket loaded");
    }
    result
}

/// Fetch the LDAP category from `source` and build the bucketed result.
pub async fn load<S>(source: &S, schema: &SettingsSchema, view: &LdapViewConfig) -> Result<LoadResult>
where
    S: SettingsSource + ?Sized,
{
    tracing::info!(category = LDAP_CATEGORY, "Loading LDAP settings");

    let values = source.read_category(LDAP_CATEGORY).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to read LDAP settings");
        e
    })?;

    let result = build_load_result(&values, schema, view);
    tracing::info!(fields = result.len(), "LDAP settings loaded");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldType;
    use crate::Error;
    use futures::executor::block_on;
    use serde_json::json;
    use std::cell::Cell;
    use std::collections::BTreeSet;

    struct MockSource {
        response: Result<Map<String, Value>>,
        calls: Cell<usize>,
    }

    impl MockSource {
        fn ok(values: Value) -> Self {
            Self {
                response: Ok(values.as_object().cloned().unwrap_or_default()),
                calls: Cell::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                response: Err(Error::fetch("NetworkError", "connection refused")),
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl SettingsSource for MockSource {
        async fn read_category(&self, category: &str) -> Result<Map<String, Value>> {
            assert_eq!(category, "ldap");
            self.calls.set(self.calls.get() + 1);
            self.response.clone()
        }
    }

    fn option(label: &str, field_type: FieldType) -> SettingOption {
        SettingOption {
            label: label.to_string(),
            help_text: Some(format!("Help for {}", label)),
            field_type,
            ..Default::default()
        }
    }

    fn schema_for(keys: &[(&str, FieldType)]) -> SettingsSchema {
        keys.iter()
            .map(|(k, t)| (k.to_string(), option(k, t.clone())))
            .collect()
    }

    fn keys(entries: &[SettingEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.key.as_str()).collect()
    }

    fn ldap_values() -> Map<String, Value> {
        let mut values = Map::new();
        values.insert("AUTH_LDAP_SERVER_URI".into(), json!("ldap://a"));
        values.insert("AUTH_LDAP_CONNECTION_OPTIONS".into(), json!({"OPT_REFERRALS": 0}));
        values.insert("AUTH_LDAP_BIND_DN".into(), json!("cn=admin"));
        values.insert("AUTH_LDAP_1_SERVER_URI".into(), json!("ldap://b"));
        values.insert("AUTH_LDAP_1_USER_SEARCH".into(), json!(["ou=users"]));
        values.insert("AUTH_LDAP_1_START_TLS".into(), json!(true));
        values.insert("AUTH_LDAP_3_SERVER_URI".into(), json!(""));
        values.insert("AUTH_LDAP_5_CONNECTION_OPTIONS".into(), json!({}));
        values
    }

    fn ldap_schema() -> SettingsSchema {
        schema_for(&[
            ("AUTH_LDAP_SERVER_URI", FieldType::String),
            ("AUTH_LDAP_CONNECTION_OPTIONS", FieldType::NestedObject),
            ("AUTH_LDAP_BIND_DN", FieldType::String),
            ("AUTH_LDAP_1_SERVER_URI", FieldType::String),
            ("AUTH_LDAP_1_USER_SEARCH", FieldType::List),
            ("AUTH_LDAP_1_START_TLS", FieldType::Boolean),
            ("AUTH_LDAP_3_SERVER_URI", FieldType::String),
            ("AUTH_LDAP_5_CONNECTION_OPTIONS", FieldType::NestedObject),
        ])
    }

    #[test]
    fn test_two_server_scenario() {
        let schema = schema_for(&[
            ("AUTH_LDAP_SERVER_URI", FieldType::String),
            ("AUTH_LDAP_1_SERVER_URI", FieldType::String),
        ]);
        let source = MockSource::ok(json!({
            "AUTH_LDAP_SERVER_URI": "ldap://a",
            "AUTH_LDAP_1_SERVER_URI": "ldap://b"
        }));

        let result = block_on(load(&source, &schema, &LdapViewConfig::default())).unwrap();

        let default = result.get(BucketId::Default).unwrap();
        assert_eq!(keys(default), vec!["AUTH_LDAP_SERVER_URI"]);
        assert_eq!(default[0].field.value, json!("ldap://a"));

        let first = result.get(BucketId::Ldap1).unwrap();
        assert_eq!(keys(first), vec!["AUTH_LDAP_1_SERVER_URI"]);
        assert_eq!(first[0].field.value, json!("ldap://b"));

        for bucket in [BucketId::Ldap2, BucketId::Ldap3, BucketId::Ldap4, BucketId::Ldap5] {
            assert_eq!(result.get(bucket), Some(&[][..]));
        }
        assert!(result.is_complete());
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn test_fetch_failure_is_returned() {
        let source = MockSource::failing();
        let err = block_on(load(&source, &ldap_schema(), &LdapViewConfig::default())).unwrap_err();
        assert_eq!(err.code(), "NetworkError");
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn test_buckets_cover_merged_keys_and_are_disjoint() {
        let result = build_load_result(&ldap_values(), &ldap_schema(), &LdapViewConfig::default());

        let mut seen = BTreeSet::new();
        for (_, bucket) in result.iter() {
            for entry in bucket {
                assert!(seen.insert(entry.key.clone()), "{} in two buckets", entry.key);
            }
        }
        let all: BTreeSet<String> = ldap_values().keys().cloned().collect();
        assert_eq!(seen, all);
    }

    #[test]
    fn test_numbered_bucket_matches_prefix_filter() {
        let merged = merge(&ldap_values(), &ldap_schema(), "_CONNECTION_OPTIONS").entries;
        let result = partition(&merged);

        for bucket in BucketId::NUMBERED {
            let expected: BTreeSet<String> = filter_by_prefix(&merged, bucket.prefix().unwrap())
                .into_iter()
                .map(|e| e.key)
                .collect();
            let actual: BTreeSet<String> = result
                .get(bucket)
                .unwrap()
                .iter()
                .map(|e| e.key.clone())
                .collect();
            assert_eq!(actual, expected, "bucket {}", bucket);
        }
    }

    #[test]
    fn test_advanced_flag() {
        let result = build_load_result(&ldap_values(), &ldap_schema(), &LdapViewConfig::default());

        let default = result.get(BucketId::Default).unwrap();
        let advanced: Vec<&str> = default
            .iter()
            .filter(|e| e.field.is_advanced)
            .map(|e| e.key.as_str())
            .collect();
        assert_eq!(advanced, vec!["AUTH_LDAP_CONNECTION_OPTIONS"]);

        let fifth = result.get(BucketId::Ldap5).unwrap();
        assert!(fifth[0].field.is_advanced);
    }

    #[test]
    fn test_custom_advanced_marker() {
        let view = LdapViewConfig {
            advanced_marker: "_BIND_".into(),
        };
        let result = build_load_result(&ldap_values(), &ldap_schema(), &view);
        let default = result.get(BucketId::Default).unwrap();
        let bind = default.iter().find(|e| e.key == "AUTH_LDAP_BIND_DN").unwrap();
        assert!(bind.field.is_advanced);
    }

    #[test]
    fn test_nested_fields_sort_last() {
        let result = build_load_result(&ldap_values(), &ldap_schema(), &LdapViewConfig::default());

        assert_eq!(
            keys(result.get(BucketId::Default).unwrap()),
            vec![
                "AUTH_LDAP_SERVER_URI",
                "AUTH_LDAP_BIND_DN",
                "AUTH_LDAP_CONNECTION_OPTIONS"
            ]
        );
        assert_eq!(
            keys(result.get(BucketId::Ldap1).unwrap()),
            vec![
                "AUTH_LDAP_1_SERVER_URI",
                "AUTH_LDAP_1_START_TLS",
                "AUTH_LDAP_1_USER_SEARCH"
            ]
        );
    }

    #[test]
    fn test_missing_schema_entry_gets_placeholder() {
        let mut values = ldap_values();
        values.insert("AUTH_LDAP_2_DENY_GROUP".into(), json!("cn=blocked"));

        let outcome = merge(&values, &ldap_schema(), "_CONNECTION_OPTIONS");
        assert_eq!(
            outcome.missing,
            vec![Error::MissingSchemaEntry("AUTH_LDAP_2_DENY_GROUP".into())]
        );
        assert_eq!(outcome.missing[0].code(), "MissingSchemaEntry");

        let placeholder = outcome
            .entries
            .iter()
            .find(|e| e.key == "AUTH_LDAP_2_DENY_GROUP")
            .unwrap();
        assert_eq!(placeholder.field.label, "AUTH_LDAP_2_DENY_GROUP");
        assert_eq!(placeholder.field.value, json!("cn=blocked"));

        let result = partition(&outcome.entries);
        assert_eq!(keys(result.get(BucketId::Ldap2).unwrap()), vec!["AUTH_LDAP_2_DENY_GROUP"]);
    }

    #[test]
    fn test_schema_reused_across_loads() {
        let schema = ldap_schema();
        let before = schema.clone();

        let first = build_load_result(&ldap_values(), &schema, &LdapViewConfig::default());
        let mut changed = ldap_values();
        changed.insert("AUTH_LDAP_SERVER_URI".into(), json!("ldap://c"));
        let second = build_load_result(&changed, &schema, &LdapViewConfig::default());

        assert_eq!(schema, before);
        assert_eq!(first.get(BucketId::Default).unwrap()[0].field.value, json!("ldap://a"));
        assert_eq!(second.get(BucketId::Default).unwrap()[0].field.value, json!("ldap://c"));
    }

    #[test]
    fn test_empty_response_yields_empty_buckets() {
        let source = MockSource::ok(json!({}));
        let result = block_on(load(&source, &ldap_schema(), &LdapViewConfig::default())).unwrap();
        assert!(result.is_complete());
        assert!(result.is_empty());
    }
}
