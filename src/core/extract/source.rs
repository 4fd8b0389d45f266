//! Physical rows and cells read by extraction
//!
//! Extraction only needs attribute lookup, the element's markup and its
//! direct child cells, so any DOM can be plugged in through these traits.

use indexmap::IndexMap;
use scraper::Html;

use crate::utils::data_attr::{collect_data_attrs, DataAttrs};

/// Attribute and content access on a row or cell element
pub trait TableElement {
    /// Value of an attribute, if present
    fn attr(&self, name: &str) -> Option<&str>;

    /// All attributes as `(name, value)` pairs
    fn attrs(&self) -> Vec<(&str, &str)>;

    /// Inner markup of the element
    fn inner_html(&self) -> String;

    /// Text content of the element
    fn text(&self) -> String;

    /// Normalized `data-*` attributes
    fn data(&self) -> DataAttrs {
        collect_data_attrs(self.attrs())
    }
}

/// A table row: an element with direct child cells
pub trait RowSource: TableElement {
    type Cell<'a>: TableElement
    where
        Self: 'a;

    /// Direct child `td`/`th` cells, in document order
    fn cells(&self) -> Vec<Self::Cell<'_>>;
}

impl<T: TableElement + ?Sized> TableElement for &T {
    fn attr(&self, name: &str) -> Option<&str> {
        (**self).attr(name)
    }

    fn attrs(&self) -> Vec<(&str, &str)> {
        (**self).attrs()
    }

    fn inner_html(&self) -> String {
        (**self).inner_html()
    }

    fn text(&self) -> String {
        (**self).text()
    }
}

/// An in-memory table cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableCell {
    /// Inner markup
    pub html: String,
    /// Attributes, including `rowspan`/`colspan` and `data-*`
    pub attrs: IndexMap<String, String>,
}

impl TableCell {
    pub fn new(html: impl Into<String>) -> Self {
        TableCell {
            html: html.into(),
            attrs: IndexMap::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_spans(self, rowspan: usize, colspan: usize) -> Self {
        self.with_attr("rowspan", rowspan.to_string())
            .with_attr("colspan", colspan.to_string())
    }

    pub fn with_rowspan(self, rowspan: usize) -> Self {
        self.with_attr("rowspan", rowspan.to_string())
    }

    pub fn with_colspan(self, colspan: usize) -> Self {
        self.with_attr("colspan", colspan.to_string())
    }
}

impl TableElement for TableCell {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    fn attrs(&self) -> Vec<(&str, &str)> {
        self.attrs
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    fn inner_html(&self) -> String {
        self.html.clone()
    }

    /// Text content, read through the same HTML parser as document tables
    fn text(&self) -> String {
        Html::parse_fragment(&self.html)
            .root_element()
            .text()
            .collect()
    }
}

/// An in-memory table row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    pub attrs: IndexMap<String, String>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        TableRow {
            cells,
            attrs: IndexMap::new(),
        }
    }

    /// Row of plain cells from their contents
    pub fn from_contents<I, S>(contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TableRow::new(contents.into_iter().map(TableCell::new).collect())
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }
}

impl TableElement for TableRow {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    fn attrs(&self) -> Vec<(&str, &str)> {
        self.attrs
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    fn inner_html(&self) -> String {
        self.cells
            .iter()
            .map(|c| format!("<td>{}</td>", c.html))
            .collect()
    }

    fn text(&self) -> String {
        self.cells.iter().map(TableElement::text).collect()
    }
}

impl RowSource for TableRow {
    type Cell<'a> = &'a TableCell;

    fn cells(&self) -> Vec<&TableCell> {
        self.cells.iter().collect()
    }
}
