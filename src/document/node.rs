//! Value representation for loosely structured documents.
//!
//! Every document loaded by dictor, whatever its source format, is converted
//! into a [`Value`] tree. Mappings keep their insertion order so that
//! case-insensitive lookups have a deterministic first match.
//!
//! # Example
//!
//! ```
//! use dictor::document::node::{Number, Value};
//! use indexmap::IndexMap;
//!
//! let mut movie = IndexMap::new();
//! movie.insert("year".to_string(), Value::Number(Number::Integer(1989)));
//! movie.insert("genre".to_string(), Value::String("scifi".to_string()));
//!
//! let mut root = IndexMap::new();
//! root.insert("robocop".to_string(), Value::Mapping(movie));
//! let root = Value::Mapping(root);
//!
//! assert_eq!(root.get_path("robocop.year"), Some(&Value::from(1989)));
//! ```

use crate::keypath::options::ResolveOptions;
use crate::keypath::resolver::resolve;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A number as found in a document (integer or float).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns true for `0` and `0.0`.
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Integer(i) => *i == 0,
            Number::Float(f) => *f == 0.0,
        }
    }
}

/// A node of a nested document.
///
/// Mappings and sequences are the only containers a path can descend into;
/// every other variant is a leaf.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Key/value pairs in insertion order
    Mapping(IndexMap<String, Value>),
    /// Ordered, 0-indexed elements
    Sequence(Vec<Value>),
    String(String),
    Number(Number),
    Boolean(bool),
    #[default]
    Null,
}

impl Value {
    /// Returns true if this value is a mapping.
    ///
    /// # Example
    ///
    /// ```
    /// use dictor::document::node::Value;
    /// use indexmap::IndexMap;
    ///
    /// assert!(Value::Mapping(IndexMap::new()).is_mapping());
    /// assert!(!Value::from(42).is_mapping());
    /// ```
    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    /// Returns true if this value is a sequence.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    /// Returns true if a path can descend into this value.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Mapping(_) | Value::Sequence(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for the values a truthiness check would treat as false:
    /// `null`, `false`, zero, and empty strings or containers.
    ///
    /// Resolution never looks at this; it lets callers tell a legitimate
    /// zero-like result apart from absence explicitly.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Mapping(map) => map.is_empty(),
            Value::Sequence(items) => items.is_empty(),
            Value::String(s) => s.is_empty(),
            Value::Number(n) => n.is_zero(),
            Value::Boolean(b) => !b,
            Value::Null => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(Number::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Resolves a `.`-separated path against this value with default options.
    ///
    /// # Example
    ///
    /// ```
    /// use dictor::document::parser::parse_json;
    /// use dictor::document::node::Value;
    ///
    /// let doc = parse_json(r#"{"a": [{"b": "found"}]}"#).unwrap();
    /// assert_eq!(doc.get_path("a.0.b"), Some(&Value::from("found")));
    /// assert_eq!(doc.get_path("a.1.b"), None);
    /// ```
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        resolve(self, path, &ResolveOptions::default())
    }

    /// Resolves a path against this value with the given options.
    pub fn get_path_with(&self, path: &str, options: &ResolveOptions) -> Option<&Value> {
        resolve(self, path, options)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Integer(i))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Number(Number::Integer(i64::from(i)))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Mapping(map) => {
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    state.serialize_entry(key, value)?;
                }
                state.end()
            }
            Value::Sequence(items) => {
                let mut state = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    state.serialize_element(item)?;
                }
                state.end()
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Null => serializer.serialize_unit(),
        }
    }
}
