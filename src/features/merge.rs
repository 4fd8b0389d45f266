//! JSON object merging and comparison helpers

use serde_json::{Map, Value};

/// Merge `sources` into `target`, left to right
///
/// A non-object target starts over as `{}`. Null sources are skipped, but a
/// null *value* inside a source overwrites. In deep mode nested objects merge
/// key by key and arrays merge index by index; shallow mode replaces them.
pub fn extend(target: Value, sources: &[Value], deep: bool) -> Value {
    let mut map = match target {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    for source in sources {
        if let Value::Object(src) = source {
            merge_map(&mut map, src, deep);
        }
    }

    Value::Object(map)
}

fn merge_map(target: &mut Map<String, Value>, source: &Map<String, Value>, deep: bool) {
    for (key, value) in source {
        match target.get_mut(key) {
            Some(existing) if deep => merge_value(existing, value),
            _ => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

fn merge_value(target: &mut Value, source: &Value) {
    match (target, source) {
        (Value::Object(dst), Value::Object(src)) => merge_map(dst, src, true),
        (Value::Array(dst), Value::Array(src)) => {
            for (i, item) in src.iter().enumerate() {
                match dst.get_mut(i) {
                    Some(existing) => merge_value(existing, item),
                    None => dst.push(item.clone()),
                }
            }
        }
        (slot, value) => *slot = value.clone(),
    }
}

/// Compare two objects key by key
///
/// Keys present in both objects must hold equal values; a key of `a` that
/// `b` lacks is not compared. With `compare_length` set both must also have
/// the same number of keys. Non-objects never compare equal.
pub fn compare_objects(a: &Value, b: &Value, compare_length: bool) -> bool {
    let (Value::Object(a), Value::Object(b)) = (a, b) else {
        return false;
    };

    if compare_length && a.len() != b.len() {
        return false;
    }

    a.iter()
        .all(|(key, value)| b.get(key).map_or(true, |other| other == value))
}

/// Position of the first element equal to `item`
pub fn find_index(items: &[Value], item: &Value) -> Option<usize> {
    items.iter().position(|candidate| candidate == item)
}
