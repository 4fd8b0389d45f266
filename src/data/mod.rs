//! Data layer - Static mappings and constants
//!
//! - Attribute names and record key layout
//! - HTML entity table

pub mod constants;
pub mod entities;

// Re-export commonly used items
pub use constants::{cell_key, CELL_KEY_SUFFIXES, CELL_TAGS, MAX_COLSPAN, MAX_ROWSPAN};
pub use entities::{escape_char, HTML_ESCAPES};
