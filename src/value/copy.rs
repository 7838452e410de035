//! Structural clone engine.
//!
//! Recursion depth equals the nesting depth of the input. `deep_copy` does not
//! guard against cycles; `try_deep_copy` tracks the containers on the current
//! path and reports a cycle instead of recursing without bound.

use std::sync::{Arc, RwLock};

use crate::error::{Result, UtilError};

use super::types::{read, Value};

/// Build an equivalent value in which every container is freshly allocated.
///
/// Scalars and opaque handles are returned as-is. The input is never mutated.
/// Calling this on a value that contains itself recurses without bound.
pub fn deep_copy(value: &Value) -> Value {
    match value {
        Value::Sequence(items) => {
            let items = read(items);
            Value::sequence(items.iter().map(deep_copy))
        }
        Value::Mapping(entries) => {
            let entries = read(entries);
            let copy = entries
                .iter()
                .map(|(key, item)| (key.clone(), deep_copy(item)))
                .collect();
            Value::Mapping(Arc::new(RwLock::new(copy)))
        }
        scalar => scalar.clone(),
    }
}

/// Like [`deep_copy`], but fails with [`UtilError::CyclicValue`] when a
/// container is reachable from itself.
///
/// Shared acyclic sub-structures are copied once per occurrence.
pub fn try_deep_copy(value: &Value) -> Result<Value> {
    let mut path = Vec::new();
    copy_guarded(value, &mut path)
}

fn copy_guarded(value: &Value, path: &mut Vec<usize>) -> Result<Value> {
    let Some(id) = value.container_id() else {
        return Ok(value.clone());
    };
    if path.contains(&id) {
        tracing::warn!("Refusing to copy cyclic value at depth {}", path.len());
        return Err(UtilError::CyclicValue { depth: path.len() });
    }

    path.push(id);
    let copy = match value {
        Value::Sequence(items) => {
            let items = read(items);
            let mut copy = Vec::with_capacity(items.len());
            for item in items.iter() {
                copy.push(copy_guarded(item, path)?);
            }
            Value::Sequence(Arc::new(RwLock::new(copy)))
        }
        Value::Mapping(entries) => {
            let entries = read(entries);
            let mut copy = Vec::with_capacity(entries.len());
            for (key, item) in entries.iter() {
                copy.push((key.clone(), copy_guarded(item, path)?));
            }
            Value::Mapping(Arc::new(RwLock::new(copy)))
        }
        other => other.clone(),
    };
    path.pop();

    Ok(copy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Collect ids of every container reachable from `value`.
    fn container_ids(value: &Value, ids: &mut Vec<usize>) {
        if let Some(id) = value.container_id() {
            ids.push(id);
        }
        for item in value.elements() {
            container_ids(&item, ids);
        }
        for (_, item) in value.entries() {
            container_ids(&item, ids);
        }
    }

    fn assert_independent(original: &Value, copy: &Value) {
        let mut left = Vec::new();
        let mut right = Vec::new();
        container_ids(original, &mut left);
        container_ids(copy, &mut right);
        assert_eq!(left.len(), right.len());
        assert!(right.iter().all(|id| !left.contains(id)));
    }

    #[test]
    fn test_deep_nested_clone() {
        let original = Value::from(json!([{"a": {"b": [1, 2, {"c": 3}]}}]));
        let copy = deep_copy(&original);

        assert_eq!(copy, original);
        assert!(!copy.same_container(&original));

        let inner = |v: &Value| v.index(0).and_then(|o| o.get("a")).and_then(|a| a.get("b"));
        let (orig_b, copy_b) = (inner(&original).unwrap(), inner(&copy).unwrap());
        assert!(!copy_b.same_container(&orig_b));
        assert!(!copy_b.index(2).unwrap().same_container(&orig_b.index(2).unwrap()));
        assert_independent(&original, &copy);
    }

    #[test]
    fn test_scalars_pass_through() {
        let text = Value::from("test");
        let copy = deep_copy(&text);
        match (&text, &copy) {
            (Value::Text(a), Value::Text(b)) => assert!(Arc::ptr_eq(a, b)),
            _ => panic!("expected text"),
        }

        assert_eq!(deep_copy(&Value::from(42)), Value::from(42));
        assert_eq!(deep_copy(&Value::Null), Value::Null);
    }

    #[test]
    fn test_empty_containers_are_new() {
        let seq = Value::sequence([]);
        let map = Value::mapping::<&str, _>([]);

        let (seq_copy, map_copy) = (deep_copy(&seq), deep_copy(&map));
        assert_eq!(seq_copy, seq);
        assert_eq!(map_copy, map);
        assert!(!seq_copy.same_container(&seq));
        assert!(!map_copy.same_container(&map));
    }

    #[test]
    fn test_mutating_original_does_not_affect_copy() {
        let original = Value::from(json!([
            {"name": "Alice", "scores": [10, 20]},
            {"name": "Bob", "scores": [30, 40]},
        ]));
        let copy = deep_copy(&original);

        original.index(0).unwrap().set("name", Value::from("Charlie"));
        original.index(1).unwrap().get("scores").unwrap().push(Value::from(50));

        assert_eq!(
            copy,
            Value::from(json!([
                {"name": "Alice", "scores": [10, 20]},
                {"name": "Bob", "scores": [30, 40]},
            ]))
        );

        copy.index(0).unwrap().set("name", Value::from("Dana"));
        assert_eq!(original.index(0).unwrap().get("name"), Some(Value::from("Charlie")));
    }

    #[test]
    fn test_opaque_is_shared() {
        let handle = Value::opaque(String::from("buffer"));
        let original = Value::sequence([handle.clone()]);
        let copy = deep_copy(&original);

        assert_eq!(copy.index(0), Some(handle));
    }

    #[test]
    fn test_key_order_preserved() {
        let original = Value::from(json!({"z": 1, "a": 2, "m": 3}));
        assert_eq!(deep_copy(&original).keys(), vec!["z", "a", "m"]);
    }

    #[test]
    fn test_try_deep_copy_detects_cycle() {
        let outer = Value::sequence([Value::from(1)]);
        let inner = Value::mapping([("back", outer.clone())]);
        outer.push(inner);

        let err = try_deep_copy(&outer).unwrap_err();
        assert!(matches!(err, UtilError::CyclicValue { depth: 2 }));
    }

    #[test]
    fn test_try_deep_copy_accepts_shared_subtree() {
        let shared = Value::sequence([Value::from("x")]);
        let original = Value::mapping([("left", shared.clone()), ("right", shared)]);

        let copy = try_deep_copy(&original).unwrap();
        assert_eq!(copy, original);

        let (left, right) = (copy.get("left").unwrap(), copy.get("right").unwrap());
        assert!(!left.same_container(&right));
        assert_independent(&original, &copy);
    }
}
