//! Column definitions and field keys

use std::borrow::Cow;
use std::fmt;
use std::num::IntErrorKind;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::data::constants::{MAX_COLSPAN, MAX_ROWSPAN};

/// Identity of a column: an explicit name, or the logical index used as a fallback
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldKey {
    Index(usize),
    Name(String),
}

impl FieldKey {
    /// The string used as a record key
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            FieldKey::Index(i) => Cow::Owned(i.to_string()),
            FieldKey::Name(name) => Cow::Borrowed(name),
        }
    }

    /// Whether this key matches a record key string
    pub fn matches(&self, key: &str) -> bool {
        self.as_key() == key
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKey::Index(i) => write!(f, "{}", i),
            FieldKey::Name(name) => write!(f, "{}", name),
        }
    }
}

impl From<&str> for FieldKey {
    fn from(name: &str) -> Self {
        FieldKey::Name(name.to_string())
    }
}

impl From<String> for FieldKey {
    fn from(name: String) -> Self {
        FieldKey::Name(name)
    }
}

impl From<usize> for FieldKey {
    fn from(index: usize) -> Self {
        FieldKey::Index(index)
    }
}

/// A column header cell
///
/// Unknown options (`sortable`, `formatter`, ...) are kept in `extra` and
/// written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_span",
        skip_serializing_if = "Option::is_none"
    )]
    pub colspan: Option<i64>,
    #[serde(
        default,
        deserialize_with = "deserialize_span",
        skip_serializing_if = "Option::is_none"
    )]
    pub rowspan: Option<i64>,
    /// Logical column, set by header resolution for `colspan == 1` cells
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_index: Option<usize>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ColumnDef {
    /// Create a column with a named field
    pub fn new(field: impl Into<FieldKey>) -> Self {
        ColumnDef {
            field: Some(field.into()),
            ..Default::default()
        }
    }

    /// Create a column without a field (it will be keyed by its index)
    pub fn anonymous() -> Self {
        ColumnDef::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_spans(mut self, rowspan: i64, colspan: i64) -> Self {
        self.rowspan = Some(rowspan);
        self.colspan = Some(colspan);
        self
    }

    pub fn with_colspan(mut self, colspan: i64) -> Self {
        self.colspan = Some(colspan);
        self
    }

    pub fn with_rowspan(mut self, rowspan: i64) -> Self {
        self.rowspan = Some(rowspan);
        self
    }

    /// Effective colspan: the declared value when positive (at most
    /// [`MAX_COLSPAN`]), otherwise 1
    pub fn colspan_or_default(&self) -> usize {
        effective_span(self.colspan, MAX_COLSPAN)
    }

    /// Effective rowspan: the declared value when positive (at most
    /// [`MAX_ROWSPAN`]), otherwise 1
    pub fn rowspan_or_default(&self) -> usize {
        effective_span(self.rowspan, MAX_ROWSPAN)
    }

    /// Whether this header cell owns a single logical data column
    pub fn is_leaf(&self) -> bool {
        self.colspan_or_default() == 1
    }
}

fn effective_span(span: Option<i64>, max: usize) -> usize {
    match span {
        Some(n) if n >= 1 => usize::try_from(n).map_or(max, |n| n.min(max)),
        _ => 1,
    }
}

/// Spans arrive as numbers or as attribute strings; unparseable strings become 0
fn deserialize_span<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => Some(
            n.as_i64()
                .or_else(|| n.as_u64().map(|_| i64::MAX))
                .unwrap_or(0),
        ),
        Some(Value::String(s)) => Some(parse_span_str(&s)),
        Some(_) => Some(0),
    })
}

/// Lenient span text: overflowing digit strings saturate, anything else is 0
pub(crate) fn parse_span_str(s: &str) -> i64 {
    match s.trim().parse::<i64>() {
        Ok(n) => n,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => i64::MAX,
        Err(_) => 0,
    }
}
