//! Formatting helpers for setting values

use serde_json::Value;

use crate::types::{FieldType, SettingField};

/// How a setting value is presented in a detail row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    /// Nothing configured
    Empty,
    /// On/Off switch value
    Toggle(bool),
    /// Plain text
    Text(String),
    /// Pretty-printed JSON for structured values
    Code(String),
}

pub fn display_value(field: &SettingField) -> DisplayValue {
    let value = &field.value;

    if field.field_type.is_nested() {
        return match value {
            Value::Null => DisplayValue::Empty,
            Value::String(s) if field.field_type == FieldType::Certificate => {
                if s.is_empty() {
                    DisplayValue::Empty
                } else {
                    DisplayValue::Code(s.clone())
                }
            }
            _ => DisplayValue::Code(pretty_json(value)),
        };
    }

    match value {
        Value::Null => DisplayValue::Empty,
        Value::Bool(b) => DisplayValue::Toggle(*b),
        Value::String(s) if s.is_empty() => DisplayValue::Empty,
        Value::Array(_) | Value::Object(_) => DisplayValue::Code(pretty_json(value)),
        _ if field.field_type == FieldType::Choice => DisplayValue::Text(
            field
                .choice_label()
                .map(str::to_string)
                .unwrap_or_else(|| scalar_text(value)),
        ),
        Value::Number(_) => DisplayValue::Text(with_unit(&scalar_text(value), field.unit.as_deref())),
        Value::String(s) => DisplayValue::Text(s.clone()),
    }
}

/// Text of a scalar JSON value without surrounding quotes.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn with_unit(text: &str, unit: Option<&str>) -> String {
    match unit {
        Some(unit) if !unit.is_empty() => format!("{} {}", text, unit),
        _ => text.to_string(),
    }
}

fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Choice, SettingOption};
    use serde_json::json;

    fn field(field_type: FieldType, value: Value) -> SettingField {
        let option = SettingOption {
            label: "Test".into(),
            field_type,
            ..Default::default()
        };
        SettingField::merge(&option, value, false)
    }

    #[test]
    fn test_boolean() {
        assert_eq!(
            display_value(&field(FieldType::Boolean, json!(true))),
            DisplayValue::Toggle(true)
        );
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(display_value(&field(FieldType::String, json!(""))), DisplayValue::Empty);
        assert_eq!(display_value(&field(FieldType::String, json!(null))), DisplayValue::Empty);
        assert_eq!(
            display_value(&field(FieldType::Certificate, json!(""))),
            DisplayValue::Empty
        );
    }

    #[test]
    fn test_integer_with_unit() {
        let mut f = field(FieldType::Integer, json!(30));
        f.unit = Some("seconds".into());
        assert_eq!(display_value(&f), DisplayValue::Text("30 seconds".into()));

        f.unit = None;
        assert_eq!(display_value(&f), DisplayValue::Text("30".into()));
    }

    #[test]
    fn test_choice_uses_display_label() {
        let mut f = field(FieldType::Choice, json!("MemberDNGroupType"));
        f.choices = Some(vec![Choice(json!("MemberDNGroupType"), "Member DN".into())]);
        assert_eq!(display_value(&f), DisplayValue::Text("Member DN".into()));

        f.value = json!("PosixGroupType");
        assert_eq!(display_value(&f), DisplayValue::Text("PosixGroupType".into()));
    }

    #[test]
    fn test_nested_values_render_as_code() {
        let f = field(FieldType::NestedObject, json!({"OPT_REFERRALS": 0}));
        assert_eq!(
            display_value(&f),
            DisplayValue::Code("{\n  \"OPT_REFERRALS\": 0\n}".into())
        );

        let f = field(FieldType::List, json!([]));
        assert_eq!(display_value(&f), DisplayValue::Code("[]".into()));
    }

    #[test]
    fn test_structured_value_with_scalar_type() {
        let f = field(FieldType::Field, json!(["ou=users", "SCOPE_SUBTREE"]));
        assert!(matches!(display_value(&f), DisplayValue::Code(_)));
    }

    #[test]
    fn test_with_unit() {
        assert_eq!(with_unit("5", Some("")), "5");
        assert_eq!(with_unit("5", Some("MB")), "5 MB");
    }
}
