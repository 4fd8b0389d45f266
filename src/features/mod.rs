//! Feature modules - helpers around the grid engines
//!
//! These are the small utilities a data table leans on when it renders
//! resolved rows:
//! - `%s` templating and HTML escaping
//! - Field titles and dotted-path item lookups
//! - Object merging and comparison
//! - A name registry for option values

pub mod escape;
pub mod fields;
pub mod merge;
pub mod registry;
pub mod template;

// Re-export commonly used functions
pub use escape::{escape_html, escape_value};
pub use fields::{get_field_title, get_item_field};
pub use merge::{compare_objects, extend, find_index};
pub use registry::{FunctionRegistry, RegisteredFn};
pub use template::{display_value, sprintf};
