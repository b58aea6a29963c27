//! Setting schema and merged setting types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Schema entries keyed by setting name, as served by the settings OPTIONS
/// endpoint.
pub type SettingsSchema = HashMap<String, SettingOption>;

/// Decode a raw schema map entry by entry.
///
/// Entries that do not fit [`SettingOption`] are skipped with a warning, so a
/// malformed setting of another category cannot hide the rest of the schema.
/// Values whose key was skipped render through [`SettingOption::fallback`].
pub fn decode_schema(raw: Map<String, Value>) -> SettingsSchema {
    let mut schema = SettingsSchema::with_capacity(raw.len());
    for (key, entry) in raw {
        match serde_json::from_value::<SettingOption>(entry) {
            Ok(option) => {
                schema.insert(key, option);
            }
            Err(e) => tracing::warn!(key = %key, error = %e, "Skipping undecodable schema entry"),
        }
    }
    schema
}

/// Field type reported by the settings schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    #[default]
    String,
    Boolean,
    Integer,
    Float,
    Choice,
    MultipleChoice,
    List,
    NestedObject,
    Certificate,
    Field,
    Other(String),
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Choice => "choice",
            Self::MultipleChoice => "multiple choice",
            Self::List => "list",
            Self::NestedObject => "nested object",
            Self::Certificate => "certificate",
            Self::Field => "field",
            Self::Other(s) => s,
        }
    }

    /// Nested types are listed after every scalar field of a bucket.
    pub fn is_nested(&self) -> bool {
        matches!(self, Self::List | Self::NestedObject | Self::Certificate)
    }

    /// Best guess for a value that arrived without a schema entry.
    pub fn infer(value: &Value) -> Self {
        match value {
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => Self::Integer,
            Value::Number(_) => Self::Float,
            Value::Array(_) => Self::List,
            Value::Object(_) => Self::NestedObject,
            Value::String(_) | Value::Null => Self::String,
        }
    }
}

impl From<String> for FieldType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "string" => Self::String,
            "boolean" => Self::Boolean,
            "integer" => Self::Integer,
            "float" => Self::Float,
            "choice" => Self::Choice,
            "multiple choice" => Self::MultipleChoice,
            "list" => Self::List,
            "nested object" => Self::NestedObject,
            "certificate" => Self::Certificate,
            "field" => Self::Field,
            _ => Self::Other(s),
        }
    }
}

impl From<FieldType> for String {
    fn from(t: FieldType) -> Self {
        t.as_str().to_string()
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `[value, display]` pair of a choice field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice(pub Value, pub String);

/// Schema entry for a single setting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingOption {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub help_text: Option<String>,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub default: Option<Value>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

impl SettingOption {
    /// Placeholder schema for a fetched key the schema does not describe.
    pub fn fallback(key: &str, value: &Value) -> Self {
        Self {
            label: key.to_string(),
            field_type: FieldType::infer(value),
            ..Default::default()
        }
    }
}

/// A setting value merged with its schema entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingField {
    pub label: String,
    pub help_text: Option<String>,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub unit: Option<String>,
    pub value: Value,
    pub is_advanced: bool,
    pub choices: Option<Vec<Choice>>,
}

impl SettingField {
    pub fn merge(option: &SettingOption, value: Value, is_advanced: bool) -> Self {
        Self {
            label: option.label.clone(),
            help_text: option.help_text.clone(),
            field_type: option.field_type.clone(),
            unit: option.unit.clone(),
            value,
            is_advanced,
            choices: option.choices.clone(),
        }
    }

    /// Display label of the current value for choice fields.
    pub fn choice_label(&self) -> Option<&str> {
        self.choices
            .as_ref()?
            .iter()
            .find(|Choice(v, _)| *v == self.value)
            .map(|Choice(_, label)| label.as_str())
    }
}

/// A keyed setting as it appears in a bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingEntry {
    pub key: String,
    pub field: SettingField,
}

impl SettingEntry {
    pub fn new(key: impl Into<String>, field: SettingField) -> Self {
        Self {
            key: key.into(),
            field,
        }
    }
}
