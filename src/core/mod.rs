//! Core grid modules
//!
//! This module contains the span-aware grid engines:
//! - `matrix`: occupancy matrix shared by both engines
//! - `header`: logical column assignment for header definitions
//! - `extract`: table body rows to row records
//! - `options`: extraction options

pub mod extract;
pub mod header;
pub mod matrix;
pub mod options;

// Re-export main types and functions
pub use extract::{
    extract_rows_from_html, extract_rows_from_table, extract_rows_with_options, CellRecord,
    HtmlDocument, HtmlTable, RowRecord, RowSource, TableCell, TableElement, TableRow,
};
pub use header::{
    resolve_header_indices, resolve_header_indices_in_place, ColumnDef, FieldKey, ResolvedHeader,
};
pub use matrix::{OccupancyMatrix, Placement};
pub use options::{ContentMode, GridOptions};
