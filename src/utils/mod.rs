//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error, warning and result types
//! - `data-*` attribute normalization
//! - Warning formatting for terminals

pub mod data_attr;
pub mod diagnostics;
pub mod error;

// Re-export commonly used items
pub use data_attr::{collect_data_attrs, normalize_data_key, parse_data_value, DataAttrs};
pub use diagnostics::format_warnings;
pub use error::{GridError, GridResult, GridWarning, Resolved, WarningKind};
