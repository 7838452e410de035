//! The `Value` enum and its container accessors.

use std::any::Any;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared handle to an ordered sequence.
pub type Sequence = Arc<RwLock<Vec<Value>>>;

/// Shared handle to a mapping. Entries keep insertion order and keys are unique.
pub type Mapping = Arc<RwLock<Vec<(String, Value)>>>;

/// A dynamically-typed datum.
///
/// Scalars are plain data. `Sequence` and `Mapping` are shared handles: cloning
/// the `Value` clones the handle, so both copies observe the same container.
/// Use [`deep_copy`](super::deep_copy) for an independent structure.
#[derive(Clone, Default)]
pub enum Value {
    /// Absence of a value
    #[default]
    Null,
    Bool(bool),
    /// Numeric value (IEEE 754)
    Number(f64),
    Text(Arc<str>),
    Sequence(Sequence),
    Mapping(Mapping),
    /// Non-plain host object. Never descended into, compared by identity.
    Opaque(Arc<dyn Any + Send + Sync>),
}

pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl Value {
    pub fn text(text: impl Into<Arc<str>>) -> Self {
        Self::Text(text.into())
    }

    /// Create a new sequence container holding `items` in order.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self::Sequence(Arc::new(RwLock::new(items.into_iter().collect())))
    }

    /// Create a new mapping container.
    ///
    /// Later duplicates of a key replace the earlier value but keep its position.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mapping = Self::Mapping(Arc::new(RwLock::new(Vec::new())));
        for (key, value) in entries {
            mapping.set(key, value);
        }
        mapping
    }

    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Self::Opaque(Arc::new(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Scalars are the immutable leaves of a value tree.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Null | Self::Bool(_) | Self::Number(_) | Self::Text(_)
        )
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Self::Sequence(_) | Self::Mapping(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text.as_ref()),
            _ => None,
        }
    }

    /// Borrow the payload of an opaque value if it has type `T`.
    pub fn downcast_opaque<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Opaque(handle) => handle.downcast_ref::<T>(),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Container access
    // ─────────────────────────────────────────────────────────────────────────

    /// Number of elements or entries. Scalars have length 0.
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(items) => read(items).len(),
            Self::Mapping(entries) => read(entries).len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up `key` in a mapping. Returns a handle sharing any container.
    pub fn get(&self, key: &str) -> Option<Value> {
        match self {
            Self::Mapping(entries) => read(entries)
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone()),
            _ => None,
        }
    }

    /// Set `key` in a mapping, returning the previous value.
    ///
    /// Has no effect unless `self` is a mapping.
    pub fn set(&self, key: impl Into<String>, value: Value) -> Option<Value> {
        let Self::Mapping(entries) = self else {
            return None;
        };
        let key = key.into();
        let mut entries = write(entries);
        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                entries.push((key, value));
                None
            }
        }
    }

    /// Remove `key` from a mapping, returning its value.
    pub fn remove(&self, key: &str) -> Option<Value> {
        let Self::Mapping(entries) = self else {
            return None;
        };
        let mut entries = write(entries);
        let position = entries.iter().position(|(k, _)| k == key)?;
        Some(entries.remove(position).1)
    }

    /// Keys of a mapping in insertion order.
    pub fn keys(&self) -> Vec<String> {
        match self {
            Self::Mapping(entries) => read(entries).iter().map(|(k, _)| k.clone()).collect(),
            _ => Vec::new(),
        }
    }

    /// Snapshot of a mapping's entries in insertion order.
    pub fn entries(&self) -> Vec<(String, Value)> {
        match self {
            Self::Mapping(entries) => read(entries).clone(),
            _ => Vec::new(),
        }
    }

    /// Element `index` of a sequence.
    pub fn index(&self, index: usize) -> Option<Value> {
        match self {
            Self::Sequence(items) => read(items).get(index).cloned(),
            _ => None,
        }
    }

    /// Snapshot of a sequence's elements.
    pub fn elements(&self) -> Vec<Value> {
        match self {
            Self::Sequence(items) => read(items).clone(),
            _ => Vec::new(),
        }
    }

    /// Append to a sequence. Returns false if `self` is not a sequence.
    pub fn push(&self, value: Value) -> bool {
        match self {
            Self::Sequence(items) => {
                write(items).push(value);
                true
            }
            _ => false,
        }
    }

    /// True when both values are handles to the same container.
    pub fn same_container(&self, other: &Value) -> bool {
        match (self.container_id(), other.container_id()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    pub(crate) fn container_id(&self) -> Option<usize> {
        match self {
            Self::Sequence(items) => Some(Arc::as_ptr(items) as usize),
            Self::Mapping(entries) => Some(Arc::as_ptr(entries) as usize),
            _ => None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Loose coercions
    // ─────────────────────────────────────────────────────────────────────────

    /// Loose numeric coercion.
    ///
    /// Text is trimmed and parsed (decimal, exponent, `0x`/`0o`/`0b` and
    /// `Infinity`); empty text and null are 0; booleans are 0 or 1. Anything
    /// unparseable, containers and opaque values are NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Null => 0.0,
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Number(n) => *n,
            Self::Text(text) => parse_number(text),
            _ => f64::NAN,
        }
    }

    /// String form used when a value becomes a mapping key.
    pub fn to_key_string(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => format_number(*n),
            Self::Text(text) => text.to_string(),
            Self::Sequence(items) => read(items)
                .iter()
                .map(|v| if v.is_null() { String::new() } else { v.to_key_string() })
                .collect::<Vec<_>>()
                .join(","),
            Self::Mapping(_) | Self::Opaque(_) => "[object Object]".to_string(),
        }
    }
}

fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN;
        }
        return u64::from_str_radix(digits, radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }

    // reject the "inf" and "nan" spellings `f64::from_str` accepts
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if (1e-6..1e21).contains(&n.abs()) {
        n.to_string()
    } else {
        // Exponent form outside [1e-6, 1e21), with an explicit `+` sign
        let sci = format!("{:e}", n);
        match sci.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => sci,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Sequence(a), Self::Sequence(b)) => {
                Arc::ptr_eq(a, b) || *read(a) == *read(b)
            }
            (Self::Mapping(a), Self::Mapping(b)) => {
                if Arc::ptr_eq(a, b) {
                    return true;
                }
                let (a, b) = (read(a), read(b));
                a.len() == b.len()
                    && a.iter()
                        .all(|(key, value)| b.iter().any(|(k, v)| k == key && v == value))
            }
            (Self::Opaque(a), Self::Opaque(b)) => {
                Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(b) => write!(f, "{:?}", b),
            Self::Number(n) => write!(f, "{:?}", n),
            Self::Text(text) => write!(f, "{:?}", &**text),
            Self::Sequence(items) => f.debug_list().entries(read(items).iter()).finish(),
            Self::Mapping(entries) => f
                .debug_map()
                .entries(read(entries).iter().map(|(k, v)| (k, v)))
                .finish(),
            Self::Opaque(_) => f.write_str("Opaque(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_set_keeps_position() {
        let map = Value::mapping([("a", Value::from(1)), ("b", Value::from(2))]);
        let previous = map.set("a", Value::from(3));

        assert_eq!(previous, Some(Value::from(1)));
        assert_eq!(map.keys(), vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(Value::from(3)));
    }

    #[test]
    fn test_mapping_equality_ignores_order() {
        let left = Value::mapping([("a", Value::from(1)), ("b", Value::from("x"))]);
        let right = Value::mapping([("b", Value::from("x")), ("a", Value::from(1))]);
        assert_eq!(left, right);

        right.set("c", Value::Null);
        assert_ne!(left, right);
    }

    #[test]
    fn test_clone_shares_container() {
        let seq = Value::sequence([Value::from(1)]);
        let handle = seq.clone();
        handle.push(Value::from(2));

        assert!(seq.same_container(&handle));
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_to_number_coercion() {
        assert_eq!(Value::from("10").to_number(), 10.0);
        assert_eq!(Value::from("  3.5 ").to_number(), 3.5);
        assert_eq!(Value::from("").to_number(), 0.0);
        assert_eq!(Value::from("0x1A").to_number(), 26.0);
        assert_eq!(Value::Null.to_number(), 0.0);
        assert_eq!(Value::Bool(true).to_number(), 1.0);
        assert!(Value::from("not a number").to_number().is_nan());
        assert!(Value::from("inf").to_number().is_nan());
        assert!(Value::sequence([]).to_number().is_nan());
    }

    #[test]
    fn test_to_key_string_uses_exponent_at_extremes() {
        assert_eq!(Value::from(1e21).to_key_string(), "1e+21");
        assert_eq!(Value::from(-1.5e25).to_key_string(), "-1.5e+25");
        assert_eq!(Value::from(1e-7).to_key_string(), "1e-7");
        assert_eq!(Value::from(2.5e-8).to_key_string(), "2.5e-8");
        assert_eq!(Value::from(1e20).to_key_string(), "100000000000000000000");
        assert_eq!(Value::from(0.000001).to_key_string(), "0.000001");
    }

    #[test]
    fn test_to_key_string() {
        assert_eq!(Value::from(10).to_key_string(), "10");
        assert_eq!(Value::from(1.5).to_key_string(), "1.5");
        assert_eq!(Value::from(f64::NAN).to_key_string(), "NaN");
        assert_eq!(Value::Null.to_key_string(), "null");
        assert_eq!(
            Value::sequence([Value::from(1), Value::Null, Value::from("a")]).to_key_string(),
            "1,,a"
        );
        assert_eq!(Value::mapping::<&str, _>([]).to_key_string(), "[object Object]");
    }

    #[test]
    fn test_opaque_identity() {
        let handle = Value::opaque(vec![1u8, 2, 3]);
        let same = handle.clone();
        let other = Value::opaque(vec![1u8, 2, 3]);

        assert_eq!(handle, same);
        assert_ne!(handle, other);
        assert_eq!(handle.downcast_opaque::<Vec<u8>>(), Some(&vec![1u8, 2, 3]));
    }
}
