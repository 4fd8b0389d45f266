//! HTML table adapter
//!
//! Reads rendered `<table>` markup through `scraper`. Only direct children
//! are walked (`table > thead > tr > th`, `table > tbody > tr > td`), so
//! cells of nested tables never leak into the outer table.

use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use serde_json::Value;

use super::source::{RowSource, TableElement};
use crate::core::header::{parse_span_str, ColumnDef, FieldKey};
use crate::data::constants::{ATTR_COLSPAN, ATTR_DATA_FIELD, ATTR_ROWSPAN, CELL_TAGS};
use crate::utils::data_attr::{data_attr_key, normalize_data_key, parse_data_value};
use crate::utils::error::{GridError, GridResult};

lazy_static! {
    static ref TABLE_SELECTOR: Selector = Selector::parse("table").unwrap();
}

impl<'h> TableElement for ElementRef<'h> {
    fn attr(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn attrs(&self) -> Vec<(&str, &str)> {
        self.value().attrs().collect()
    }

    fn inner_html(&self) -> String {
        ElementRef::inner_html(self)
    }

    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }
}

impl<'h> RowSource for ElementRef<'h> {
    type Cell<'a> = ElementRef<'h> where Self: 'a;

    fn cells(&self) -> Vec<ElementRef<'h>> {
        child_elements(*self)
            .filter(|child| CELL_TAGS.contains(&child.value().name()))
            .collect()
    }
}

fn child_elements<'h>(element: ElementRef<'h>) -> impl Iterator<Item = ElementRef<'h>> {
    element.children().filter_map(ElementRef::wrap)
}

/// A parsed HTML document holding one or more tables
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a document or fragment
    pub fn parse(input: &str) -> Self {
        HtmlDocument {
            html: Html::parse_document(input),
        }
    }

    /// Every table in document order, nested ones included
    pub fn tables(&self) -> Vec<HtmlTable<'_>> {
        self.html
            .select(&TABLE_SELECTOR)
            .map(|element| HtmlTable { element })
            .collect()
    }

    /// The `index`-th table of the document
    pub fn table(&self, index: usize) -> GridResult<HtmlTable<'_>> {
        let tables = self.tables();
        let count = tables.len();
        tables.into_iter().nth(index).ok_or_else(|| {
            GridError::invalid(format!(
                "table {} requested but the document has {} table(s)",
                index, count
            ))
        })
    }
}

/// One `<table>` element
#[derive(Debug, Clone, Copy)]
pub struct HtmlTable<'h> {
    element: ElementRef<'h>,
}

impl<'h> HtmlTable<'h> {
    pub fn element(&self) -> ElementRef<'h> {
        self.element
    }

    /// Rows of the table's own `<thead>` sections
    pub fn header_rows(&self) -> Vec<ElementRef<'h>> {
        self.section_rows("thead")
    }

    /// Rows of the table's own `<tbody>` sections, plus rows placed directly in the table
    pub fn body_rows(&self) -> Vec<ElementRef<'h>> {
        let mut rows = Vec::new();
        for child in child_elements(self.element) {
            match child.value().name() {
                "tbody" => rows.extend(rows_of(child)),
                "tr" => rows.push(child),
                _ => {}
            }
        }
        rows
    }

    /// Column definitions read from the `<thead>` cells
    ///
    /// Each cell contributes its `data-field` as the field, its text as the
    /// title, its spans, and its remaining `data-*` attributes as options.
    pub fn header_columns(&self) -> Vec<Vec<ColumnDef>> {
        self.header_rows()
            .iter()
            .map(|row| row.cells().iter().map(column_from_cell).collect())
            .collect()
    }

    fn section_rows(&self, section: &str) -> Vec<ElementRef<'h>> {
        child_elements(self.element)
            .filter(|child| child.value().name() == section)
            .flat_map(rows_of)
            .collect()
    }
}

fn rows_of(section: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    child_elements(section).filter(|child| child.value().name() == "tr")
}

fn column_from_cell(cell: &ElementRef<'_>) -> ColumnDef {
    let title = normalize_ws(&TableElement::text(cell));
    let mut column = ColumnDef {
        field: cell
            .attr(ATTR_DATA_FIELD)
            .map(|f| FieldKey::Name(f.to_string())),
        title: (!title.is_empty()).then_some(title),
        colspan: cell.attr(ATTR_COLSPAN).map(parse_span_str),
        rowspan: cell.attr(ATTR_ROWSPAN).map(parse_span_str),
        ..Default::default()
    };

    for (name, value) in cell.attrs() {
        if name.eq_ignore_ascii_case(ATTR_DATA_FIELD) {
            continue;
        }
        if let Some(key) = data_attr_key(name) {
            column
                .extra
                .insert(normalize_data_key(key), parse_data_value(value));
        }
    }
    column
}

fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Read a column option back out of a header-derived definition
pub fn column_option<'c>(column: &'c ColumnDef, key: &str) -> Option<&'c Value> {
    column.extra.get(key)
}
