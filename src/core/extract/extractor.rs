//! Table body extraction
//!
//! Maps every physical cell onto its logical column, skipping positions
//! still held by cells from earlier rows (rowspan) or earlier in the same
//! row (colspan), and builds one record per physical row.

use std::num::IntErrorKind;

use tracing::debug;

use super::record::{CellRecord, RowRecord};
use super::source::{RowSource, TableElement};
use crate::core::header::{ColumnDef, FieldKey};
use crate::core::matrix::OccupancyMatrix;
use crate::core::options::{ContentMode, GridOptions};
use crate::data::constants::{ATTR_COLSPAN, ATTR_ROWSPAN, MAX_COLSPAN, MAX_ROWSPAN};
use crate::utils::error::{record_warning, GridResult, GridWarning, Resolved, WarningKind};

/// Extract rows with default options
///
/// `columns` is the flat list of data columns, indexed by logical column
/// (see [`ResolvedHeader::leaf_columns`](crate::core::header::ResolvedHeader::leaf_columns)).
/// Cells landing on a column with no definition are dropped and reported.
pub fn extract_rows_from_table<R: RowSource>(
    columns: &[ColumnDef],
    rows: &[R],
) -> Resolved<Vec<RowRecord>> {
    extract_rows(columns, rows, &GridOptions::default())
}

/// Extract rows with custom options
///
/// Fails only in strict mode, when the layout produced warnings.
pub fn extract_rows_with_options<R: RowSource>(
    columns: &[ColumnDef],
    rows: &[R],
    options: &GridOptions,
) -> GridResult<Resolved<Vec<RowRecord>>> {
    let resolved = extract_rows(columns, rows, options);
    if options.strict {
        resolved.into_strict().map(Resolved::new)
    } else {
        Ok(resolved)
    }
}

fn extract_rows<R: RowSource>(
    columns: &[ColumnDef],
    rows: &[R],
    options: &GridOptions,
) -> Resolved<Vec<RowRecord>> {
    let mut warnings = Vec::new();
    let mut matrix = OccupancyMatrix::new(rows.len(), columns.len());
    let mut records = Vec::with_capacity(rows.len());

    for (y, row) in rows.iter().enumerate() {
        let mut record = RowRecord::from_element(row);

        for (physical, cell) in row.cells().iter().enumerate() {
            let rowspan = parse_span_attr(cell, ATTR_ROWSPAN, MAX_ROWSPAN, y, &mut warnings);
            let colspan = parse_span_attr(cell, ATTR_COLSPAN, MAX_COLSPAN, y, &mut warnings);

            let placement = matrix.place(y, physical, rowspan, colspan);
            let x = placement.column;

            let Some(column) = columns.get(x) else {
                record_warning(
                    &mut warnings,
                    GridWarning::new(
                        WarningKind::MissingColumn,
                        format!(
                            "cell {} maps to column {} but only {} columns are defined",
                            physical,
                            x,
                            columns.len()
                        ),
                    )
                    .at(y, Some(x)),
                );
                continue;
            };

            if placement.clipped {
                record_warning(
                    &mut warnings,
                    GridWarning::new(
                        WarningKind::SpanClipped,
                        format!(
                            "cell {} spans {}x{} past the {}x{} table",
                            physical,
                            rowspan,
                            colspan,
                            matrix.rows(),
                            matrix.cols()
                        ),
                    )
                    .at(y, Some(x)),
                );
            }

            let field = column.field.clone().unwrap_or(FieldKey::Index(x));
            let content = cell_content(cell, options);
            record.insert(
                field.as_key().into_owned(),
                CellRecord::from_element(cell, content, x),
            );
        }

        records.push(record);
    }

    debug!(
        rows = rows.len(),
        columns = columns.len(),
        warnings = warnings.len(),
        "extracted table rows"
    );

    Resolved::with_warnings(records, warnings)
}

fn cell_content<E: TableElement>(cell: &E, options: &GridOptions) -> String {
    let content = match options.content {
        ContentMode::InnerHtml => cell.inner_html(),
        ContentMode::Text => cell.text(),
    };
    if options.trim_content {
        content.trim().to_string()
    } else {
        content
    }
}

/// Read a span attribute; absent, empty or non-positive values count as 1
///
/// Values above `max` are clamped to it.
fn parse_span_attr<E: TableElement>(
    cell: &E,
    name: &str,
    max: usize,
    row: usize,
    warnings: &mut Vec<GridWarning>,
) -> usize {
    let Some(raw) = cell.attr(name) else {
        return 1;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 1;
    }

    match trimmed.parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => n,
        Ok(n) if n > max => clamp_span(name, raw, max, row, warnings),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            clamp_span(name, raw, max, row, warnings)
        }
        _ => {
            record_warning(
                warnings,
                GridWarning::new(
                    WarningKind::InvalidSpan,
                    format!("{}=\"{}\" is not a positive integer, using 1", name, raw),
                )
                .at(row, None),
            );
            1
        }
    }
}

fn clamp_span(
    name: &str,
    raw: &str,
    max: usize,
    row: usize,
    warnings: &mut Vec<GridWarning>,
) -> usize {
    record_warning(
        warnings,
        GridWarning::new(
            WarningKind::InvalidSpan,
            format!("{}=\"{}\" is too large, clamped to {}", name, raw, max),
        )
        .at(row, None),
    );
    max
}
