//! Grouping and numeric aggregation over lists of records.
//!
//! A record is a mapping `Value`. Field values go through
//! [`Value::to_number`], so numeric text such as `"10"` counts as 10.

use std::collections::HashMap;
use std::hash::Hash;

use crate::value::Value;

/// Key used for records that lack the grouping property.
pub const MISSING_KEY: &str = "undefined";

/// Group `records` by the string form of `property`.
///
/// Returns a mapping from key to a sequence of the matching records, in
/// first-seen key order. Records are shared, not copied.
pub fn group_by(records: &[Value], property: &str) -> Value {
    let groups = Value::mapping::<String, _>([]);

    for record in records {
        let key = record
            .get(property)
            .map_or_else(|| MISSING_KEY.to_string(), |v| v.to_key_string());

        match groups.get(&key) {
            Some(bucket) => {
                bucket.push(record.clone());
            }
            None => {
                groups.set(key, Value::sequence([record.clone()]));
            }
        }
    }

    groups
}

/// Group typed items by a derived key, keeping first-seen key order.
pub fn group_by_key<T, K, I, F>(items: I, mut key_fn: F) -> Vec<(K, Vec<T>)>
where
    I: IntoIterator<Item = T>,
    K: Hash + Eq + Clone,
    F: FnMut(&T) -> K,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();

    for item in items {
        let key = key_fn(&item);
        match positions.get(&key) {
            Some(&pos) => groups[pos].1.push(item),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push((key, vec![item]));
            }
        }
    }

    groups
}

fn field(record: &Value, key: &str) -> f64 {
    record.get(key).map_or(f64::NAN, |v| v.to_number())
}

/// Sum of `key` over all records, skipping values that are not numbers.
pub fn object_key_sum(records: &[Value], key: &str) -> f64 {
    records
        .iter()
        .map(|r| field(r, key))
        .filter(|n| !n.is_nan())
        .sum()
}

/// Sum of `key` divided by the number of records where it is positive.
///
/// Returns 0 when no record has a usable value.
pub fn object_key_average(records: &[Value], key: &str) -> f64 {
    let positives = records.iter().filter(|r| field(r, key) > 0.0).count();
    object_key_sum(records, key) / positives.max(1) as f64
}

/// Largest value of `key`, starting from 0.
///
/// Any missing or non-numeric value makes the result NaN.
pub fn object_key_max(records: &[Value], key: &str) -> f64 {
    records.iter().map(|r| field(r, key)).fold(0.0, nan_max)
}

/// Smallest value of `key`, starting from +∞.
///
/// Any missing or non-numeric value makes the result NaN.
pub fn object_key_min(records: &[Value], key: &str) -> f64 {
    records
        .iter()
        .map(|r| field(r, key))
        .fold(f64::INFINITY, nan_min)
}

// f64::max/min ignore NaN; these propagate it
fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}
