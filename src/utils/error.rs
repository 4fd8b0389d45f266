//! Error handling for spangrid
//!
//! This module provides a unified error type and result type for all
//! resolution and extraction operations, plus the non-fatal warning type the
//! resolvers collect instead of failing.

use std::fmt;

use thiserror::Error;

/// Grid error type
#[derive(Debug, Clone, Error)]
pub enum GridError {
    /// Parse error - input could not be parsed
    #[error("{}", parse_message(.message, .line, .column))]
    ParseError {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },
    /// Invalid input
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
    /// Span layout anomalies reported as errors in strict mode
    #[error("Malformed table: {}", join_warnings(.warnings))]
    Malformed { warnings: Vec<GridWarning> },
    /// IO error (for file operations)
    #[error("IO error: {message}")]
    IoError { message: String },
    /// JSON / TOML (de)serialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

fn parse_message(message: &str, line: &Option<usize>, column: &Option<usize>) -> String {
    match (line, column) {
        (Some(l), Some(c)) => format!("Parse error at line {}, column {}: {}", l, c, message),
        (Some(l), None) => format!("Parse error at line {}: {}", l, message),
        _ => format!("Parse error: {}", message),
    }
}

fn join_warnings(warnings: &[GridWarning]) -> String {
    warnings
        .iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        GridError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for GridError {
    fn from(err: toml::de::Error) -> Self {
        GridError::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

// Convenience constructors for errors
impl GridError {
    pub fn parse(message: impl Into<String>) -> Self {
        GridError::ParseError {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    pub fn parse_at(message: impl Into<String>, line: usize, column: usize) -> Self {
        GridError::ParseError {
            message: message.into(),
            line: Some(line),
            column: Some(column),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        GridError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn malformed(warnings: Vec<GridWarning>) -> Self {
        GridError::Malformed { warnings }
    }
}

/// Kind of layout anomaly found while resolving a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// A cell found no unclaimed column inside the grid
    RowOverflow,
    /// A cell's rowspan/colspan reaches past the grid bounds
    SpanClipped,
    /// A body cell landed on a logical column with no column definition
    MissingColumn,
    /// A span attribute was present but not a positive integer
    InvalidSpan,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::RowOverflow => write!(f, "row-overflow"),
            WarningKind::SpanClipped => write!(f, "span-clipped"),
            WarningKind::MissingColumn => write!(f, "missing-column"),
            WarningKind::InvalidSpan => write!(f, "invalid-span"),
        }
    }
}

/// Layout warning (non-fatal issue)
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct GridWarning {
    pub kind: WarningKind,
    /// Grid row (0-indexed) the anomaly was found on
    pub row: Option<usize>,
    /// Logical column (0-indexed), when one was resolved
    pub column: Option<usize>,
    pub message: String,
}

impl GridWarning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            row: None,
            column: None,
            message: message.into(),
        }
    }

    pub fn at(mut self, row: usize, column: Option<usize>) -> Self {
        self.row = Some(row);
        self.column = column;
        self
    }
}

impl fmt::Display for GridWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.row, self.column) {
            (Some(r), Some(c)) => write!(f, "[{}] row {}, column {}: ", self.kind, r, c)?,
            (Some(r), None) => write!(f, "[{}] row {}: ", self.kind, r)?,
            _ => write!(f, "[{}] ", self.kind)?,
        }
        write!(f, "{}", self.message)
    }
}

/// Log a warning and append it to the collected list
pub(crate) fn record_warning(warnings: &mut Vec<GridWarning>, warning: GridWarning) {
    tracing::warn!(kind = %warning.kind, row = ?warning.row, column = ?warning.column, "{}", warning.message);
    warnings.push(warning);
}

/// Resolution output with collected warnings
#[derive(Debug, Clone)]
pub struct Resolved<T> {
    /// The resolved value
    pub value: T,
    /// Any warnings generated during resolution
    pub warnings: Vec<GridWarning>,
}

impl<T> Resolved<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(value: T, warnings: Vec<GridWarning>) -> Self {
        Self { value, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Fail with [`GridError::Malformed`] if any warning was recorded
    pub fn into_strict(self) -> GridResult<T> {
        if self.warnings.is_empty() {
            Ok(self.value)
        } else {
            Err(GridError::malformed(self.warnings))
        }
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
