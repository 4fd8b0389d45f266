//! Tests for table body extraction

use pretty_assertions::assert_eq;
use serde_json::json;

use super::*;
use crate::core::header::FieldKey;
use crate::core::options::ContentMode;
use crate::utils::error::{GridError, WarningKind};

fn ab_columns() -> Vec<ColumnDef> {
    vec![ColumnDef::new("a"), ColumnDef::new("b")]
}

#[test]
fn test_plain_grid() {
    let rows = vec![
        TableRow::from_contents([" 1 ", "2"]),
        TableRow::from_contents(["3", "\n4\t"]),
    ];
    let resolved = extract_rows_from_table(&ab_columns(), &rows);
    assert!(!resolved.has_warnings());

    let records = resolved.value;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].len(), 2);
    assert_eq!(records[0].get("a"), Some("1"));
    assert_eq!(records[0].get("b"), Some("2"));
    assert_eq!(records[1].get("a"), Some("3"));
    assert_eq!(records[1].get("b"), Some("4"));
}

#[test]
fn test_single_row_flat_record() {
    let rows = vec![TableRow::from_contents(["x", "y"])];
    let records = extract_rows_from_table(&ab_columns(), &rows).into_value();
    assert_eq!(
        records[0].to_json(),
        json!({
            "_id": null,
            "_class": null,
            "_data": {},
            "a": "x",
            "_a_id": null,
            "_a_class": null,
            "_a_rowspan": null,
            "_a_colspan": null,
            "_a_title": null,
            "_a_data": {},
            "b": "y",
            "_b_id": null,
            "_b_class": null,
            "_b_rowspan": null,
            "_b_colspan": null,
            "_b_title": null,
            "_b_data": {}
        })
    );
}

#[test]
fn test_rowspan_shifts_next_row() {
    let rows = vec![
        TableRow::new(vec![
            TableCell::new("x").with_rowspan(2),
            TableCell::new("y"),
        ]),
        TableRow::from_contents(["z"]),
    ];
    let records = extract_rows_from_table(&ab_columns(), &rows).into_value();

    assert_eq!(records[1].get("a"), None);
    assert_eq!(records[1].get("b"), Some("z"));
    assert_eq!(records[1].cell("b").map(|c| c.column), Some(1));
    assert_eq!(
        records[0].cell("a").and_then(|c| c.rowspan.clone()),
        Some("2".to_string())
    );
}

#[test]
fn test_colspan_shifts_same_row() {
    let columns = vec![
        ColumnDef::new("a"),
        ColumnDef::new("b"),
        ColumnDef::new("c"),
    ];
    let rows = vec![TableRow::new(vec![
        TableCell::new("wide").with_colspan(2),
        TableCell::new("last"),
    ])];
    let records = extract_rows_from_table(&columns, &rows).into_value();
    assert_eq!(records[0].get("a"), Some("wide"));
    assert_eq!(records[0].get("b"), None);
    assert_eq!(records[0].get("c"), Some("last"));
}

#[test]
fn test_block_span() {
    // A spans two rows and two columns; c and f share the last column
    let columns = vec![
        ColumnDef::new("x"),
        ColumnDef::new("y"),
        ColumnDef::new("z"),
    ];
    let rows = vec![
        TableRow::new(vec![TableCell::new("A").with_spans(2, 2), TableCell::new("c")]),
        TableRow::from_contents(["f"]),
        TableRow::from_contents(["g", "h", "i"]),
    ];
    let resolved = extract_rows_from_table(&columns, &rows);
    assert!(!resolved.has_warnings());

    let records = resolved.value;
    assert_eq!(records[1].fields().collect::<Vec<_>>(), vec!["z"]);
    assert_eq!(records[1].get("z"), Some("f"));
    assert_eq!(records[2].fields().collect::<Vec<_>>(), vec!["x", "y", "z"]);
}

#[test]
fn test_field_less_column_uses_index() {
    let columns = vec![ColumnDef::new("a"), ColumnDef::anonymous()];
    let rows = vec![TableRow::from_contents(["1", "2"])];
    let records = extract_rows_from_table(&columns, &rows).into_value();
    assert_eq!(records[0].get("1"), Some("2"));
}

#[test]
fn test_numeric_field_key() {
    let columns = vec![ColumnDef::new(FieldKey::Index(7))];
    let rows = vec![TableRow::from_contents(["v"])];
    let records = extract_rows_from_table(&columns, &rows).into_value();
    assert_eq!(records[0].get("7"), Some("v"));
    assert_eq!(records[0].to_json()["_7_title"], json!(null));
}

#[test]
fn test_row_and_cell_metadata() {
    let rows = vec![TableRow::new(vec![
        TableCell::new("x")
            .with_attr("id", "cell-a")
            .with_attr("class", "num")
            .with_attr("title", "tip")
            .with_attr("data-sort-value", "10"),
        TableCell::new("y"),
    ])
    .with_attr("id", "row-1")
    .with_attr("class", "odd")
    .with_attr("data-index", "0")];

    let records = extract_rows_from_table(&ab_columns(), &rows).into_value();
    let json = records[0].to_json();
    assert_eq!(json["_id"], json!("row-1"));
    assert_eq!(json["_class"], json!("odd"));
    assert_eq!(json["_data"], json!({ "index": 0 }));
    assert_eq!(json["_a_id"], json!("cell-a"));
    assert_eq!(json["_a_class"], json!("num"));
    assert_eq!(json["_a_title"], json!("tip"));
    assert_eq!(json["_a_data"], json!({ "sort-value": 10 }));
}

#[test]
fn test_missing_column_is_skipped() {
    let rows = vec![TableRow::from_contents(["1", "2", "3"])];
    let resolved = extract_rows_from_table(&ab_columns(), &rows);

    assert_eq!(resolved.value[0].len(), 2);
    assert_eq!(resolved.warnings.len(), 1);
    assert_eq!(resolved.warnings[0].kind, WarningKind::MissingColumn);
    assert_eq!(resolved.warnings[0].column, Some(2));
}

#[test]
fn test_strict_rejects_malformed() {
    let rows = vec![TableRow::from_contents(["1", "2", "3"])];
    let err = extract_rows_with_options(&ab_columns(), &rows, &GridOptions::strict()).unwrap_err();
    assert!(matches!(err, GridError::Malformed { .. }));

    let rows = vec![TableRow::from_contents(["1", "2"])];
    let ok = extract_rows_with_options(&ab_columns(), &rows, &GridOptions::strict()).unwrap();
    assert_eq!(ok.value.len(), 1);
}

#[test]
fn test_invalid_span_attribute() {
    let rows = vec![TableRow::new(vec![
        TableCell::new("x").with_attr("colspan", "wide"),
        TableCell::new("y").with_attr("rowspan", ""),
    ])];
    let resolved = extract_rows_from_table(&ab_columns(), &rows);
    assert_eq!(resolved.value[0].get("b"), Some("y"));
    assert_eq!(resolved.warnings.len(), 1);
    assert_eq!(resolved.warnings[0].kind, WarningKind::InvalidSpan);
}

#[test]
fn test_rowspan_past_last_row() {
    let rows = vec![TableRow::new(vec![
        TableCell::new("x").with_rowspan(3),
        TableCell::new("y"),
    ])];
    let resolved = extract_rows_from_table(&ab_columns(), &rows);
    assert_eq!(resolved.value[0].get("a"), Some("x"));
    assert_eq!(resolved.warnings[0].kind, WarningKind::SpanClipped);
}

#[test]
fn test_text_mode_and_no_trim() {
    let rows = vec![TableRow::from_contents([" <b>bold</b> ", "y"])];

    let opts = GridOptions {
        content: ContentMode::Text,
        ..Default::default()
    };
    let records = extract_rows_with_options(&ab_columns(), &rows, &opts)
        .unwrap()
        .into_value();
    assert_eq!(records[0].get("a"), Some("bold"));

    let opts = GridOptions {
        trim_content: false,
        ..Default::default()
    };
    let records = extract_rows_with_options(&ab_columns(), &rows, &opts)
        .unwrap()
        .into_value();
    assert_eq!(records[0].get("a"), Some(" <b>bold</b> "));
}

#[test]
fn test_text_mode_matches_html_source() {
    let contents = ["a &amp; b", r#"<abbr title="a>b">ab</abbr>"#];
    let html = format!(
        "<table><tr><td>{}</td><td>{}</td></tr></table>",
        contents[0], contents[1]
    );
    let opts = GridOptions {
        content: ContentMode::Text,
        ..Default::default()
    };

    let from_html = extract_rows_from_html(&html, Some(ab_columns().as_slice()), 0, &opts)
        .unwrap()
        .into_value();
    let from_memory = extract_rows_with_options(&ab_columns(), &[TableRow::from_contents(contents)], &opts)
        .unwrap()
        .into_value();

    assert_eq!(from_memory, from_html);
    assert_eq!(from_memory[0].get("a"), Some("a & b"));
    assert_eq!(from_memory[0].get("b"), Some("ab"));
}

#[test]
fn test_oversized_span_attributes_are_clamped() {
    let rows = vec![TableRow::new(vec![
        TableCell::new("x").with_attr("colspan", "5000"),
        TableCell::new("y").with_attr("rowspan", "99999999999999999999999"),
    ])];
    let resolved = extract_rows_from_table(&ab_columns(), &rows);
    assert_eq!(resolved.value[0].get("a"), Some("x"));

    let invalid: Vec<_> = resolved
        .warnings
        .iter()
        .filter(|w| w.kind == WarningKind::InvalidSpan)
        .collect();
    assert_eq!(invalid.len(), 2);
    assert!(invalid[0].message.contains("clamped to 1000"));
    assert!(invalid[1].message.contains("clamped to 65534"));
    assert!(resolved
        .warnings
        .iter()
        .any(|w| w.kind == WarningKind::SpanClipped));
}

#[test]
fn test_html_with_huge_header_colspans() {
    let html = r#"
        <table>
          <thead>
            <tr><th colspan="9223372036854775807">A</th><th colspan="9223372036854775807">B</th></tr>
          </thead>
          <tbody><tr><td>1</td><td>2</td></tr></tbody>
        </table>"#;

    let resolved = extract_rows_from_html(html, None, 0, &GridOptions::default()).unwrap();
    assert_eq!(resolved.value.len(), 1);
    assert!(resolved
        .warnings
        .iter()
        .any(|w| w.kind == WarningKind::InvalidSpan));
    // Both header cells span, so the body cells are keyed by index
    assert_eq!(resolved.value[0].get("0"), Some("1"));
    assert_eq!(resolved.value[0].get("1"), Some("2"));
}

#[test]
fn test_empty_table() {
    let rows: Vec<TableRow> = Vec::new();
    let resolved = extract_rows_from_table(&ab_columns(), &rows);
    assert!(resolved.value.is_empty());
    assert!(!resolved.has_warnings());
}

#[test]
fn test_html_with_thead() {
    let html = r#"
        <table>
          <thead>
            <tr><th data-field="name" rowspan="2">Name</th><th colspan="2">Score</th></tr>
            <tr><th data-field="home">Home</th><th data-field="away">Away</th></tr>
          </thead>
          <tbody>
            <tr id="g1"><td>Derby</td><td>2</td><td>1</td></tr>
            <tr id="g2"><td rowspan="2">Cup</td><td>0</td><td>0</td></tr>
            <tr id="g3"><td>3</td><td class="win">4</td></tr>
          </tbody>
        </table>"#;

    let resolved = extract_rows_from_html(html, None, 0, &GridOptions::default()).unwrap();
    assert!(!resolved.has_warnings());

    let records = resolved.value;
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].get("name"), Some("Derby"));
    assert_eq!(records[0].get("away"), Some("1"));
    assert_eq!(records[2].id.as_deref(), Some("g3"));
    assert_eq!(records[2].get("name"), None);
    assert_eq!(records[2].get("home"), Some("3"));
    assert_eq!(records[2].get("away"), Some("4"));
    assert_eq!(
        records[2].cell("away").and_then(|c| c.class.as_deref()),
        Some("win")
    );
}

#[test]
fn test_html_with_explicit_columns() {
    let html = "<table><tr><td><i>x</i></td><td>y</td></tr></table>";
    let records = extract_rows_from_html(html, Some(ab_columns().as_slice()), 0, &GridOptions::default())
        .unwrap()
        .into_value();
    assert_eq!(records[0].get("a"), Some("<i>x</i>"));
    assert_eq!(records[0].get("b"), Some("y"));
}

#[test]
fn test_html_missing_table() {
    let err = extract_rows_from_html("<p>no table</p>", None, 0, &GridOptions::default());
    assert!(matches!(err, Err(GridError::InvalidInput { .. })));
}
