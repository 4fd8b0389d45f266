//! Attribute names and record key layout

/// Cell element names read as direct children of a row
pub const CELL_TAGS: [&str; 2] = ["td", "th"];

pub const ATTR_ID: &str = "id";
pub const ATTR_CLASS: &str = "class";
pub const ATTR_TITLE: &str = "title";
pub const ATTR_ROWSPAN: &str = "rowspan";
pub const ATTR_COLSPAN: &str = "colspan";
/// Header cell attribute naming the column's field
pub const ATTR_DATA_FIELD: &str = "data-field";

/// Largest colspan honoured; larger values are clamped, as browsers do
pub const MAX_COLSPAN: usize = 1000;
/// Largest rowspan honoured; larger values are clamped, as browsers do
pub const MAX_ROWSPAN: usize = 65534;

/// Row-level shadow keys of a flattened record
pub const ROW_ID_KEY: &str = "_id";
pub const ROW_CLASS_KEY: &str = "_class";
pub const ROW_DATA_KEY: &str = "_data";

/// Per-cell shadow key suffixes, in the order they are written
pub const CELL_KEY_SUFFIXES: [&str; 6] = ["id", "class", "rowspan", "colspan", "title", "data"];

/// Build the shadow key for a cell attribute: `_<field>_<suffix>`
pub fn cell_key(field: &str, suffix: &str) -> String {
    format!("_{}_{}", field, suffix)
}
