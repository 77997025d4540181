//! Declarative plugin options
//!
//! The host's visualization editor renders options from declarative records
//! (key -> type, label, default) and hands the user's chosen values back on
//! every data delivery. None of these options affect graph derivation.

use serde::Serialize;
use serde_json::json;

use crate::core::Value;

/// Type of a plugin option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    String,
    Number,
}

/// One declarative option record shown in the host's visualization editor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionSpec {
    #[serde(rename = "type")]
    pub option_type: OptionType,
    pub label: String,
    pub default: Value,
}

impl OptionSpec {
    pub fn string(label: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            option_type: OptionType::String,
            label: label.into(),
            default: Value::Text(default.into()),
        }
    }

    pub fn number(label: impl Into<String>, default: f64) -> Self {
        Self {
            option_type: OptionType::Number,
            label: label.into(),
            default: Value::Number(default),
        }
    }
}

/// The plugin's option schema, in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionSchema {
    entries: Vec<(String, OptionSpec)>,
}

impl OptionSchema {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, spec: OptionSpec) -> Self {
        self.entries.push((key.into(), spec));
        self
    }

    pub fn get(&self, key: &str) -> Option<&OptionSpec> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, spec)| spec)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The schema as the JSON object the host registers
    pub fn to_json(&self) -> serde_json::Value {
        let mut schema = serde_json::Map::new();
        for (key, spec) in &self.entries {
            schema.insert(key.clone(), json!(spec));
        }
        serde_json::Value::Object(schema)
    }
}

/// The user's chosen option values, delivered on each update
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginConfig {
    values: Vec<(String, Value)>,
}

impl PluginConfig {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.push((key.into(), value.into()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(Value::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.get(key) {
            Some(Value::Number(number)) => Some(*number),
            _ => None,
        }
    }

    /// A key's value, falling back to the schema default when unset
    pub fn resolve<'a>(&'a self, schema: &'a OptionSchema, key: &str) -> Option<&'a Value> {
        self.get(key).or_else(|| schema.get(key).map(|spec| &spec.default))
    }
}
