//! # spangrid
//!
//! Span-aware grid resolution for data tables.
//!
//! ## Features
//!
//! - **Header Resolution**: Assigns logical column indices to multi-row
//!   headers built from `rowspan`/`colspan` cells
//! - **Table Extraction**: Maps physical `<td>`/`<th>` cells of an HTML table
//!   body onto logical columns and builds flat row records
//! - **One Occupancy Model**: Both engines place cells through the same
//!   occupancy matrix
//! - **Warnings, not Panics**: Malformed layouts degrade gracefully and are
//!   reported, or rejected in strict mode
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ### Header Resolution
//!
//! ```rust
//! use spangrid::{resolve_header_indices, ColumnDef, FieldKey};
//!
//! let header = vec![
//!     vec![ColumnDef::new("name").with_rowspan(2), ColumnDef::anonymous().with_colspan(2)],
//!     vec![ColumnDef::new("home"), ColumnDef::new("away")],
//! ];
//! let resolved = resolve_header_indices(&header).into_value();
//! assert_eq!(resolved.rows[1][1].field_index, Some(2));
//! assert_eq!(resolved.fields()[0], FieldKey::from("name"));
//! ```
//!
//! ### Table Extraction
//!
//! ```rust
//! use spangrid::{extract_rows_from_html, GridOptions};
//!
//! let html = r#"<table>
//!   <thead><tr><th data-field="a">A</th><th data-field="b">B</th></tr></thead>
//!   <tbody>
//!     <tr><td rowspan="2">x</td><td>y</td></tr>
//!     <tr><td>z</td></tr>
//!   </tbody>
//! </table>"#;
//!
//! let records = extract_rows_from_html(html, None, 0, &GridOptions::default())
//!     .unwrap()
//!     .into_value();
//! assert_eq!(records[1].get("b"), Some("z"));
//! assert_eq!(records[1].to_json()["_b_rowspan"], serde_json::Value::Null);
//! ```

/// Core grid modules
pub mod core;

/// Data layer - static keys and tables
pub mod data;

/// Feature modules - rendering helpers
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core grid functions
pub use core::extract::{
    column_option, extract_rows_from_html, extract_rows_from_table, extract_rows_with_options,
    CellRecord, HtmlDocument, HtmlTable, RowRecord, RowSource, TableCell, TableElement, TableRow,
};
pub use core::header::{
    resolve_header_indices, resolve_header_indices_in_place, ColumnDef, FieldKey, ResolvedHeader,
};
pub use core::matrix::OccupancyMatrix;
pub use core::options::{ContentMode, GridOptions};

// Re-export data modules
pub use data::constants;

// Re-export feature helpers
pub use features::{
    compare_objects, escape_html, extend, find_index, get_field_title, get_item_field, sprintf,
    FunctionRegistry,
};

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{GridError, GridResult, GridWarning, Resolved, WarningKind};

/// Resolve header rows given as JSON (an array of arrays of column objects)
///
/// Returns the annotated rows as JSON alongside any layout warnings.
pub fn resolve_header_json(input: &str) -> GridResult<Resolved<serde_json::Value>> {
    let rows = parse_header_rows(input)?;
    let resolved = resolve_header_indices(&rows);
    let json = serde_json::to_value(&resolved.value.rows)?;
    Ok(Resolved::with_warnings(json, resolved.warnings))
}

/// Parse header rows from JSON
///
/// A flat array of columns is accepted as a single header row.
pub fn parse_header_rows(input: &str) -> GridResult<Vec<Vec<ColumnDef>>> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    header_rows_from_value(value)
}

/// Interpret a JSON value as header rows
pub fn header_rows_from_value(value: serde_json::Value) -> GridResult<Vec<Vec<ColumnDef>>> {
    let serde_json::Value::Array(items) = value else {
        return Err(GridError::invalid("header must be a JSON array"));
    };

    if items.iter().all(serde_json::Value::is_array) {
        items
            .into_iter()
            .map(|row| serde_json::from_value(row).map_err(GridError::from))
            .collect()
    } else {
        let row: Vec<ColumnDef> = serde_json::from_value(serde_json::Value::Array(items))?;
        Ok(vec![row])
    }
}

/// Extract the first table of `html` into flat JSON records
pub fn extract_table_json(
    html: &str,
    columns: Option<&[ColumnDef]>,
    options: &GridOptions,
) -> GridResult<Resolved<Vec<serde_json::Value>>> {
    let resolved = extract_rows_from_html(html, columns, 0, options)?;
    let json = resolved.value.iter().map(RowRecord::to_json).collect();
    Ok(Resolved::with_warnings(json, resolved.warnings))
}
