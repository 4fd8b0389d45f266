//! Field lookups on column definitions and data items

use serde_json::Value;

use super::escape::escape_value;
use crate::core::header::{ColumnDef, FieldKey};

/// Title of the first column whose field is `field`, or an empty string
pub fn get_field_title<'c, I>(columns: I, field: &FieldKey) -> String
where
    I: IntoIterator<Item = &'c ColumnDef>,
{
    columns
        .into_iter()
        .find(|c| c.field.as_ref() == Some(field))
        .and_then(|c| c.title.clone())
        .unwrap_or_default()
}

/// Read a field from a data item
///
/// An own property named exactly `field` wins; otherwise `field` is read as a
/// dotted path (`"owner.name"`). Numeric path segments index into arrays.
/// String results are HTML-escaped when `escape` is set.
pub fn get_item_field(item: &Value, field: &str, escape: bool) -> Option<Value> {
    let value = match item.get(field) {
        Some(own) => Some(own.clone()),
        None => lookup_path(item, field).cloned(),
    };

    if escape {
        value.map(escape_value)
    } else {
        value
    }
}

fn lookup_path<'v>(item: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(item, |value, segment| match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}
