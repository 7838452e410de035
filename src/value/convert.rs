//! Conversions between `Value`, Rust scalars and `serde_json::Value`.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number};

use super::types::{read, Value};

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(Arc::from(text))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(Arc::from(text))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::sequence(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Self::from(s),
            serde_json::Value::Array(items) => Self::sequence(items.into_iter().map(Self::from)),
            serde_json::Value::Object(entries) => {
                Self::mapping(entries.into_iter().map(|(k, v)| (k, Self::from(v))))
            }
        }
    }
}

impl From<&Value> for serde_json::Value {
    /// Non-finite numbers and opaque handles have no JSON form and become null.
    fn from(value: &Value) -> Self {
        match value {
            Value::Null | Value::Opaque(_) => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::Text(text) => Self::String(text.to_string()),
            Value::Sequence(items) => Self::Array(read(items).iter().map(Self::from).collect()),
            Value::Mapping(entries) => {
                let mut map = Map::new();
                for (key, item) in read(entries).iter() {
                    map.insert(key.clone(), Self::from(item));
                }
                Self::Object(map)
            }
        }
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    // Integral values print without a trailing ".0"
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        return serde_json::Value::Number(Number::from(n as i64));
    }
    Number::from_f64(n).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde_json::Value::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::Value::from(self))
    }
}
