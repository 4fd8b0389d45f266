//! Column header resolution
//!
//! Header rows describe grouped columns with `colspan`/`rowspan`. Resolution
//! assigns every single-column header cell the logical data column it owns.
//!
//! # Example
//!
//! ```rust
//! use spangrid::core::header::{resolve_header_indices, ColumnDef};
//!
//! let rows = vec![
//!     vec![ColumnDef::new("name").with_rowspan(2), ColumnDef::anonymous().with_colspan(2)],
//!     vec![ColumnDef::new("min"), ColumnDef::new("max")],
//! ];
//! let header = resolve_header_indices(&rows).into_value();
//! assert_eq!(header.rows[1][0].field_index, Some(1));
//! assert_eq!(header.rows[1][1].field_index, Some(2));
//! ```

mod column;
mod resolver;


// Re-export public API
pub use column::{ColumnDef, FieldKey};
pub(crate) use column::parse_span_str;
pub use resolver::{resolve_header_indices, resolve_header_indices_in_place, ResolvedHeader};
