//! Row records produced by extraction

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use super::source::TableElement;
use crate::data::constants::{
    cell_key, ATTR_CLASS, ATTR_COLSPAN, ATTR_ID, ATTR_ROWSPAN, ATTR_TITLE, CELL_KEY_SUFFIXES,
    ROW_CLASS_KEY, ROW_DATA_KEY, ROW_ID_KEY,
};
use crate::utils::data_attr::DataAttrs;

/// Content and presentation metadata of one physical cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellRecord {
    pub content: String,
    /// Logical column the cell was mapped to
    pub column: usize,
    pub id: Option<String>,
    pub class: Option<String>,
    /// Raw `rowspan` attribute, as written
    pub rowspan: Option<String>,
    /// Raw `colspan` attribute, as written
    pub colspan: Option<String>,
    pub title: Option<String>,
    pub data: DataAttrs,
}

impl CellRecord {
    /// Capture a cell's metadata around already extracted content
    pub fn from_element<E: TableElement + ?Sized>(cell: &E, content: String, column: usize) -> Self {
        CellRecord {
            content,
            column,
            id: cell.attr(ATTR_ID).map(str::to_string),
            class: cell.attr(ATTR_CLASS).map(str::to_string),
            rowspan: cell.attr(ATTR_ROWSPAN).map(str::to_string),
            colspan: cell.attr(ATTR_COLSPAN).map(str::to_string),
            title: cell.attr(ATTR_TITLE).map(str::to_string),
            data: cell.data(),
        }
    }
}

/// One physical table row, keyed by column field
///
/// Serializes to the flat layout the table widget consumes: the row's
/// `_id`, `_class` and `_data`, then for every field its content followed by
/// `_<field>_id`, `_<field>_class`, `_<field>_rowspan`, `_<field>_colspan`,
/// `_<field>_title` and `_<field>_data`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowRecord {
    pub id: Option<String>,
    pub class: Option<String>,
    pub data: DataAttrs,
    pub cells: IndexMap<String, CellRecord>,
}

impl RowRecord {
    /// Start a record from the row element's attributes
    pub fn from_element<E: TableElement + ?Sized>(row: &E) -> Self {
        RowRecord {
            id: row.attr(ATTR_ID).map(str::to_string),
            class: row.attr(ATTR_CLASS).map(str::to_string),
            data: row.data(),
            cells: IndexMap::new(),
        }
    }

    /// Content stored under `field`
    pub fn get(&self, field: &str) -> Option<&str> {
        self.cells.get(field).map(|c| c.content.as_str())
    }

    pub fn cell(&self, field: &str) -> Option<&CellRecord> {
        self.cells.get(field)
    }

    /// Field keys in insertion order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Store a cell; a later cell on the same field replaces the earlier one
    pub(crate) fn insert(&mut self, field: String, cell: CellRecord) {
        self.cells.insert(field, cell);
    }

    /// The flat record as a JSON object
    pub fn to_json(&self) -> Value {
        Value::Object(self.to_json_map())
    }

    pub fn to_json_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(ROW_ID_KEY.to_string(), opt_string(&self.id));
        map.insert(ROW_CLASS_KEY.to_string(), opt_string(&self.class));
        map.insert(ROW_DATA_KEY.to_string(), data_object(&self.data));

        for (field, cell) in &self.cells {
            map.insert(field.clone(), Value::String(cell.content.clone()));
            for (suffix, value) in CELL_KEY_SUFFIXES.iter().zip(cell_shadow_values(cell)) {
                map.insert(cell_key(field, suffix), value);
            }
        }
        map
    }
}

/// Shadow values in `CELL_KEY_SUFFIXES` order
fn cell_shadow_values(cell: &CellRecord) -> [Value; 6] {
    [
        opt_string(&cell.id),
        opt_string(&cell.class),
        opt_string(&cell.rowspan),
        opt_string(&cell.colspan),
        opt_string(&cell.title),
        data_object(&cell.data),
    ]
}

fn opt_string(value: &Option<String>) -> Value {
    value.clone().map_or(Value::Null, Value::String)
}

fn data_object(data: &DataAttrs) -> Value {
    Value::Object(data.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
}

impl Serialize for RowRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let flat = self.to_json_map();
        let mut map = serializer.serialize_map(Some(flat.len()))?;
        for (key, value) in &flat {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
