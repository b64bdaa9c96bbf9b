//! Parsing of JSON, YAML and TOML text into [`Value`] trees.
//!
//! Each format is parsed with its serde crate and then converted into the
//! format-independent representation. Mapping order follows the source
//! document for JSON and YAML.
//!
//! # Example
//!
//! ```
//! use dictor::document::parser::{parse_json, parse_yaml};
//!
//! let from_json = parse_json(r#"{"name": "Alice", "age": 30}"#).unwrap();
//! let from_yaml = parse_yaml("name: Alice\nage: 30\n").unwrap();
//! assert_eq!(from_json, from_yaml);
//! ```

use super::node::{Number, Value};
use anyhow::{Context, Result};
use indexmap::IndexMap;

/// Parses a JSON string into a `Value`.
///
/// Integers that fit in an `i64` stay integers; larger ones become floats.
///
/// # Errors
///
/// Returns an error if the input is not valid JSON.
///
/// ```
/// use dictor::document::parser::parse_json;
///
/// assert!(parse_json(r#"{"unclosed": "#).is_err());
/// ```
pub fn parse_json(json_str: &str) -> Result<Value> {
    let value: serde_json::Value = serde_json::from_str(json_str).context("Failed to parse JSON")?;
    Ok(from_json_value(&value))
}

/// Parses a YAML string into a `Value`.
///
/// # Errors
///
/// Returns an error if the input is not valid YAML.
pub fn parse_yaml(yaml_str: &str) -> Result<Value> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml_str).context("Failed to parse YAML")?;
    Ok(from_yaml_value(&value))
}

/// Parses a TOML document into a `Value`.
///
/// TOML tables are ordered by key, since the `toml` crate does not keep
/// document order.
///
/// # Errors
///
/// Returns an error if the input is not a valid TOML document.
pub fn parse_toml(toml_str: &str) -> Result<Value> {
    let table: toml::Table = toml::from_str(toml_str).context("Failed to parse TOML")?;
    Ok(from_toml_table(&table))
}

/// Converts a `serde_json::Value` into a `Value`.
pub fn from_json_value(value: &serde_json::Value) -> Value {
    match value {
        serde_json::Value::Object(map) => Value::Mapping(
            map.iter()
                .map(|(k, v)| (k.clone(), from_json_value(v)))
                .collect(),
        ),
        serde_json::Value::Array(items) => {
            Value::Sequence(items.iter().map(from_json_value).collect())
        }
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Number(Number::Integer(i)),
            None => Value::Number(Number::Float(n.as_f64().unwrap_or(0.0))),
        },
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Null => Value::Null,
    }
}

/// Converts a `serde_yaml::Value` into a `Value`.
///
/// Scalar mapping keys are stringified so that `1492: ...` can be reached by
/// the path segment `1492`. Keys that are themselves sequences or mappings
/// cannot be named by a path and are dropped. Tags are discarded.
pub fn from_yaml_value(value: &serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Mapping(mapping) => {
            let mut entries = IndexMap::with_capacity(mapping.len());
            for (key, child) in mapping {
                match yaml_key_to_string(key) {
                    Some(key) => {
                        entries.insert(key, from_yaml_value(child));
                    }
                    None => log::warn!("Skipping YAML mapping entry with a non-scalar key"),
                }
            }
            Value::Mapping(entries)
        }
        serde_yaml::Value::Sequence(items) => {
            Value::Sequence(items.iter().map(from_yaml_value).collect())
        }
        serde_yaml::Value::String(s) => Value::String(s.clone()),
        serde_yaml::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Number(Number::Integer(i)),
            None => Value::Number(Number::Float(n.as_f64().unwrap_or(0.0))),
        },
        serde_yaml::Value::Bool(b) => Value::Boolean(*b),
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Tagged(tagged) => from_yaml_value(&tagged.value),
    }
}

fn yaml_key_to_string(key: &serde_yaml::Value) -> Option<String> {
    match key {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Null => Some("null".to_string()),
        serde_yaml::Value::Tagged(tagged) => yaml_key_to_string(&tagged.value),
        serde_yaml::Value::Sequence(_) | serde_yaml::Value::Mapping(_) => None,
    }
}

fn from_toml_table(table: &toml::Table) -> Value {
    Value::Mapping(
        table
            .iter()
            .map(|(k, v)| (k.clone(), from_toml_value(v)))
            .collect(),
    )
}

/// Converts a `toml::Value` into a `Value`. Datetimes become strings.
pub fn from_toml_value(value: &toml::Value) -> Value {
    match value {
        toml::Value::Table(table) => from_toml_table(table),
        toml::Value::Array(items) => Value::Sequence(items.iter().map(from_toml_value).collect()),
        toml::Value::String(s) => Value::String(s.clone()),
        toml::Value::Integer(i) => Value::Number(Number::Integer(*i)),
        toml::Value::Float(f) => Value::Number(Number::Float(*f)),
        toml::Value::Boolean(b) => Value::Boolean(*b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
    }
}
