//! Header index assignment
//!
//! Walks header rows in order, placing every cell on the first logical
//! column its row has not yet given away to an earlier cell's span.

use serde::Serialize;
use tracing::debug;

use super::column::{ColumnDef, FieldKey};
use crate::core::matrix::OccupancyMatrix;
use crate::data::constants::{ATTR_COLSPAN, ATTR_ROWSPAN, MAX_COLSPAN, MAX_ROWSPAN};
use crate::utils::error::{record_warning, GridWarning, Resolved, WarningKind};

/// Header rows annotated with logical column indices
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedHeader {
    /// Header rows, each cell carrying `field_index` / defaulted `field`
    pub rows: Vec<Vec<ColumnDef>>,
    /// Logical column count (sum of the first row's colspans)
    pub total_columns: usize,
}

impl ResolvedHeader {
    /// The flat list of data columns, indexed by logical column
    ///
    /// Every leaf cell sits at its `field_index`. Positions no leaf claimed
    /// hold a field-less column, which extraction keys by its index.
    pub fn leaf_columns(&self) -> Vec<ColumnDef> {
        let width = self
            .rows
            .iter()
            .flatten()
            .filter(|c| c.is_leaf())
            .filter_map(|c| c.field_index)
            .map(|i| i + 1)
            .max()
            .unwrap_or(0)
            .max(self.total_columns);

        let mut leaves = vec![ColumnDef::anonymous(); width];
        for column in self.rows.iter().flatten().filter(|c| c.is_leaf()) {
            if let Some(index) = column.field_index {
                leaves[index] = column.clone();
            }
        }
        leaves
    }

    /// Fields of the data columns, in logical order
    pub fn fields(&self) -> Vec<FieldKey> {
        self.leaf_columns()
            .into_iter()
            .enumerate()
            .map(|(i, c)| c.field.unwrap_or(FieldKey::Index(i)))
            .collect()
    }

    /// Title of the column owning `field`, or an empty string
    pub fn field_title(&self, field: &FieldKey) -> String {
        crate::features::fields::get_field_title(self.rows.iter().flatten(), field)
    }
}

/// Resolve header rows into a new, annotated copy
///
/// Each cell with `colspan == 1` receives the logical column it landed on as
/// `field_index`, and that index as its `field` when it had none. Cells
/// spanning several columns are left without a `field_index`.
pub fn resolve_header_indices(rows: &[Vec<ColumnDef>]) -> Resolved<ResolvedHeader> {
    let mut resolved = rows.to_vec();
    let (total_columns, warnings) = assign_field_indices(&mut resolved);

    Resolved::with_warnings(
        ResolvedHeader {
            rows: resolved,
            total_columns,
        },
        warnings,
    )
}

/// Annotate header rows in place, returning the warnings collected
pub fn resolve_header_indices_in_place(rows: &mut [Vec<ColumnDef>]) -> Vec<GridWarning> {
    assign_field_indices(rows).1
}

/// Walk the header rows, placing each cell at the first free logical column
///
/// Every cell claims its full `rowspan x colspan` rectangle. Only the leaf
/// (`colspan == 1`) cells get a `field_index`; spanning cells just reserve
/// their columns in the rows they cover.
fn assign_field_indices(rows: &mut [Vec<ColumnDef>]) -> (usize, Vec<GridWarning>) {
    let mut warnings = Vec::new();
    let total_columns: usize = rows
        .first()
        .map(|first| {
            first
                .iter()
                .fold(0usize, |acc, c| acc.saturating_add(c.colspan_or_default()))
        })
        .unwrap_or(0);

    let mut matrix = OccupancyMatrix::new(rows.len(), total_columns);

    for (i, row) in rows.iter_mut().enumerate() {
        for column in row.iter_mut() {
            check_declared_spans(column, i, &mut warnings);

            let rowspan = column.rowspan_or_default();
            let colspan = column.colspan_or_default();
            let placement = matrix.place(i, 0, rowspan, colspan);

            if !placement.in_grid(total_columns) {
                record_warning(
                    &mut warnings,
                    GridWarning::new(
                        WarningKind::RowOverflow,
                        format!(
                            "header cell {} has no free column (row already holds {} of {})",
                            describe(column),
                            matrix.claimed_in_row(i),
                            total_columns
                        ),
                    )
                    .at(i, None),
                );
                continue;
            }

            if column.is_leaf() {
                column.field_index = Some(placement.column);
                if column.field.is_none() {
                    column.field = Some(FieldKey::Index(placement.column));
                }
            }

            if placement.clipped {
                record_warning(
                    &mut warnings,
                    GridWarning::new(
                        WarningKind::SpanClipped,
                        format!(
                            "header cell {} spans {}x{} past the {}x{} header",
                            describe(column),
                            rowspan,
                            colspan,
                            matrix.rows(),
                            total_columns
                        ),
                    )
                    .at(i, Some(placement.column)),
                );
            }
        }
    }

    debug!(
        rows = rows.len(),
        columns = total_columns,
        warnings = warnings.len(),
        "resolved header indices"
    );

    (total_columns, warnings)
}

fn check_declared_spans(column: &ColumnDef, row: usize, warnings: &mut Vec<GridWarning>) {
    let declared = [
        (ATTR_COLSPAN, column.colspan, MAX_COLSPAN),
        (ATTR_ROWSPAN, column.rowspan, MAX_ROWSPAN),
    ];
    for (name, span, max) in declared {
        let Some(n) = span else { continue };
        let message = if n < 1 {
            format!("header cell {} has {} {}, using 1", describe(column), name, n)
        } else if usize::try_from(n).map_or(true, |n| n > max) {
            format!(
                "header cell {} has {} {}, clamped to {}",
                describe(column),
                name,
                n,
                max
            )
        } else {
            continue;
        };
        record_warning(
            warnings,
            GridWarning::new(WarningKind::InvalidSpan, message).at(row, None),
        );
    }
}

fn describe(column: &ColumnDef) -> String {
    match (&column.field, &column.title) {
        (Some(field), _) => format!("'{}'", field),
        (None, Some(title)) => format!("\"{}\"", title),
        (None, None) => "<unnamed>".to_string(),
    }
}
