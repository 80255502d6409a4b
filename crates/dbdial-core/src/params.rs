//! Free-form driver parameters and their query-string form

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Bytes kept verbatim by [`query_escape`]
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Escape a string for use inside a URI query component.
///
/// ASCII alphanumerics and `-_.~` are kept, a space becomes `+`, every
/// other byte is percent-encoded.
pub fn query_escape(value: &str) -> String {
    // `%` is always escaped, so "%20" in the output can only come from a space
    utf8_percent_encode(value, QUERY_COMPONENT)
        .to_string()
        .replace("%20", "+")
}

/// A scalar value of a free-form connection parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Bool(bool),
    Str(String),
}

impl ParamValue {
    /// Convert a YAML scalar. Floats, integers outside the `i64` range,
    /// nulls and collections have no parameter form.
    pub fn from_yaml(value: &serde_yaml::Value) -> Option<Self> {
        match value {
            serde_yaml::Value::Bool(v) => Some(ParamValue::Bool(*v)),
            serde_yaml::Value::Number(n) => n.as_i64().map(ParamValue::Int),
            serde_yaml::Value::String(v) => Some(ParamValue::Str(v.clone())),
            _ => None,
        }
    }
}

/// Deserialize a parameter map, skipping entries whose value has no
/// parameter form instead of failing the whole document.
pub(crate) fn deserialize_params<'de, D>(
    deserializer: D,
) -> std::result::Result<HashMap<String, ParamValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<HashMap<String, serde_yaml::Value>>::deserialize(deserializer)?
        .unwrap_or_default();

    let mut params = HashMap::with_capacity(raw.len());
    for (key, value) in raw {
        match ParamValue::from_yaml(&value) {
            Some(param) => {
                params.insert(key, param);
            }
            None => tracing::warn!(
                param = %key,
                value = ?value,
                "ignoring parameter, value is not an integer, boolean or string"
            ),
        }
    }
    Ok(params)
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value as i64)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Bool(v) => write!(f, "{}", v),
            ParamValue::Str(v) => write!(f, "{}", v),
        }
    }
}

/// Ordered query parameters of a connection string.
///
/// Keys and values are stored already encoded and are written verbatim,
/// in insertion order. Producers are responsible for inserting keys in a
/// deterministic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter list
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a value for `key`, keeping any existing values
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// First value stored for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Keys in emission order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize as `k1=v1&k2=v2`
    pub fn encode(&self) -> String {
        let mut buf = String::new();
        for (key, value) in &self.pairs {
            if !buf.is_empty() {
                buf.push('&');
            }
            buf.push_str(key);
            buf.push('=');
            buf.push_str(value);
        }
        buf
    }
}

#[cfg(test)]
mod tests;
