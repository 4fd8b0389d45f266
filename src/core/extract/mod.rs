//! Table body extraction
//!
//! Turns physical table rows into row records keyed by the logical column's
//! field, honouring `rowspan`/`colspan` of earlier cells.
//!
//! # Architecture
//!
//! ```text
//! RowSource (in-memory rows | scraper elements) -> Occupancy Matrix -> RowRecord
//! ```
//!
//! # Example
//!
//! ```rust
//! use spangrid::core::extract::{extract_rows_from_table, TableCell, TableRow};
//! use spangrid::core::header::ColumnDef;
//!
//! let columns = vec![ColumnDef::new("a"), ColumnDef::new("b")];
//! let rows = vec![
//!     TableRow::new(vec![TableCell::new("x").with_rowspan(2), TableCell::new("y")]),
//!     TableRow::from_contents(["z"]),
//! ];
//! let records = extract_rows_from_table(&columns, &rows).into_value();
//! assert_eq!(records[1].get("b"), Some("z"));
//! ```

mod extractor;
mod html;
mod record;
mod source;

#[cfg(test)]
mod tests;

// Re-export public API
pub use extractor::{extract_rows_from_table, extract_rows_with_options};
pub use html::{column_option, HtmlDocument, HtmlTable};
pub use record::{CellRecord, RowRecord};
pub use source::{RowSource, TableCell, TableElement, TableRow};

use crate::core::header::{resolve_header_indices, ColumnDef};
use crate::core::options::GridOptions;
use crate::utils::error::{GridResult, Resolved};

/// Extract the body rows of the `table_index`-th table in `html`
///
/// When `columns` is `None` the data columns come from the table's own
/// `<thead>`, resolved the same way header definitions are. Warnings from
/// header resolution and body extraction are returned together.
pub fn extract_rows_from_html(
    html: &str,
    columns: Option<&[ColumnDef]>,
    table_index: usize,
    options: &GridOptions,
) -> GridResult<Resolved<Vec<RowRecord>>> {
    let document = HtmlDocument::parse(html);
    let table = document.table(table_index)?;

    let mut warnings = Vec::new();
    let leaf_columns = match columns {
        Some(columns) => columns.to_vec(),
        None => {
            let header = resolve_header_indices(&table.header_columns());
            warnings.extend(header.warnings);
            header.value.leaf_columns()
        }
    };

    let body = extract_rows_with_options(&leaf_columns, &table.body_rows(), options)?;
    warnings.extend(body.warnings);

    let resolved = Resolved::with_warnings(body.value, warnings);
    if options.strict {
        resolved.into_strict().map(Resolved::new)
    } else {
        Ok(resolved)
    }
}
