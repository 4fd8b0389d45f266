//! `data-*` attribute helpers
//!
//! Row and cell records carry the element's `data-*` attributes as a map
//! keyed in kebab-case, with values coerced the way the widget runtime reads
//! them (`"true"` becomes a boolean, canonical numbers become numbers, JSON
//! objects and arrays are parsed).

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde_json::{Number, Value};

lazy_static! {
    static ref UPPER_PATTERN: Regex = Regex::new(r"[A-Z]").unwrap();
    static ref JSON_BRACE_PATTERN: Regex = Regex::new(r"^(?s:\{.*\}|\[.*\])$").unwrap();
}

/// Normalized `data-*` attributes of one element
pub type DataAttrs = IndexMap<String, Value>;

/// Convert a camelCase data key to kebab-case (`userId` -> `user-id`)
///
/// Every ASCII capital except a leading one starts a new segment, so
/// `userID` becomes `user-i-d`. Keys that are already kebab-case are
/// returned lower-cased and otherwise unchanged.
pub fn normalize_data_key(key: &str) -> String {
    UPPER_PATTERN
        .replace_all(key, |caps: &Captures| {
            let m = caps.get(0).map_or("", |m| m.as_str());
            let at_start = caps.get(0).is_some_and(|m| m.start() == 0);
            if at_start {
                m.to_string()
            } else {
                format!("-{}", m)
            }
        })
        .to_lowercase()
}

/// Strip the `data-` prefix from an attribute name, if present
pub fn data_attr_key(attr_name: &str) -> Option<&str> {
    let prefix = attr_name.get(..5)?;
    if prefix.eq_ignore_ascii_case("data-") && attr_name.len() > 5 {
        attr_name.get(5..)
    } else {
        None
    }
}

/// Coerce a raw attribute string into a JSON value
pub fn parse_data_value(raw: &str) -> Value {
    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        "null" => return Value::Null,
        _ => {}
    }

    if let Some(number) = canonical_number(raw) {
        return Value::Number(number);
    }

    if JSON_BRACE_PATTERN.is_match(raw) {
        if let Ok(value) = serde_json::from_str::<Value>(raw) {
            return value;
        }
    }

    Value::String(raw.to_string())
}

/// A number whose textual form round-trips exactly (`"7"`, `"1.5"`, but not `"07"` or `"1.0"`)
fn canonical_number(raw: &str) -> Option<Number> {
    let parsed: f64 = raw.parse().ok()?;
    if !parsed.is_finite() || (parsed == 0.0 && raw.starts_with('-')) {
        return None;
    }
    if parsed.to_string() != raw {
        return None;
    }
    if parsed.fract() == 0.0 && parsed.abs() < i64::MAX as f64 {
        return Some(Number::from(parsed as i64));
    }
    Number::from_f64(parsed)
}

/// Collect and normalize `data-*` attributes from `(name, value)` pairs
///
/// Non-data attributes are ignored. Later duplicates win.
pub fn collect_data_attrs<'a, I>(attrs: I) -> DataAttrs
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut data = DataAttrs::new();
    for (name, value) in attrs {
        if let Some(key) = data_attr_key(name) {
            data.insert(normalize_data_key(key), parse_data_value(value));
        }
    }
    data
}
