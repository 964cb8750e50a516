//! Value and section types for the in-memory cog model.
//!
//! A document is a `Vec` of sections and a section is a `Vec` of entries, both
//! in insertion order. Lookups by name are linear scans.

use serde::{Serialize, Serializer};
use std::fmt;

/// Name of the implicit section holding keys that appear before any header.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// A typed configuration value.
///
/// The type is decided once, at parse time (see [`Value::infer`]), and never
/// coerced afterwards: a `Boolean` always serializes as bare `true`/`false`,
/// a `String` always serializes quoted.
///
/// Serializes as the bare JSON primitive. Non-finite floats have no JSON
/// number form and serialize as the strings `"NaN"`, `"inf"` and `"-inf"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    #[serde(serialize_with = "serialize_float")]
    Float(f64),
    String(String),
}

fn serialize_float<S: Serializer>(f: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if f.is_finite() {
        serializer.serialize_f64(*f)
    } else {
        serializer.collect_str(f)
    }
}

impl Value {
    /// Infer a typed value from raw text using the same precedence as `load`:
    /// boolean, integer, float, quoted string, then bare string.
    ///
    /// ```
    /// use cog_core::Value;
    ///
    /// assert_eq!(Value::infer("TRUE"), Value::Boolean(true));
    /// assert_eq!(Value::infer("-42"), Value::Integer(-42));
    /// assert_eq!(Value::infer("3.14"), Value::Float(3.14));
    /// assert_eq!(Value::infer("\"hi\""), Value::String("hi".into()));
    /// assert_eq!(Value::infer("plain"), Value::String("plain".into()));
    /// ```
    pub fn infer(text: &str) -> Value {
        crate::decoder::parse_value(text)
    }

    /// The value as it is written to a cog file (strings quoted).
    pub fn to_cog(&self) -> String {
        crate::encoder::format_value(self)
    }

    /// Short lowercase name of the variant, for diagnostics and listings.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Floats, and integers widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Plain rendering for display in an editor: strings are shown unquoted.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            other => f.write_str(&crate::encoder::format_value(other)),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

/// One key in a section: its value and the comment attached to it, if any.
///
/// The comment is raw text including its `//` marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    key: String,
    value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl Entry {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// A named group of entries in key insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    name: String,
    entries: Vec<Entry>,
}

impl Section {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True for the implicit headerless section.
    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_SECTION
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Key names in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entry(key).map(|e| &e.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overwrite the value of an existing key in place, or append a new key
    /// with no comment. An existing comment is left untouched.
    pub(crate) fn set(&mut self, key: String, value: Value) -> &mut Entry {
        let idx = match self.entries.iter().position(|e| e.key == key) {
            Some(idx) => {
                self.entries[idx].value = value;
                idx
            }
            None => {
                self.entries.push(Entry {
                    key,
                    value,
                    comment: None,
                });
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx]
    }

    /// Like [`Section::set`] but also replaces the comment. Used by the
    /// parser, where a repeated key takes the comment of its last occurrence.
    pub(crate) fn set_with_comment(&mut self, key: String, value: Value, comment: Option<String>) {
        self.set(key, value).comment = comment;
    }
}
