//! WASM bindings for spangrid
//!
//! This module provides JavaScript-accessible header resolution and table
//! extraction. Results come back as plain objects:
//! `{ output, success, error, warnings }`.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::core::header::ColumnDef;
#[cfg(feature = "wasm")]
use crate::core::options::{ContentMode, GridOptions};
#[cfg(feature = "wasm")]
use crate::utils::error::{GridResult, Resolved};

/// Extraction options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractOptions {
    /// Trim whitespace around cell content
    #[serde(default = "default_true")]
    pub trim_content: bool,
    /// Store cell text instead of inner markup
    #[serde(default)]
    pub text: bool,
    /// Fail on malformed span layouts
    #[serde(default)]
    pub strict: bool,
    /// Which table of the document to read
    #[serde(default)]
    pub table_index: usize,
}

#[cfg(feature = "wasm")]
impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            trim_content: true,
            text: false,
            strict: false,
            table_index: 0,
        }
    }
}

#[cfg(feature = "wasm")]
impl From<&ExtractOptions> for GridOptions {
    fn from(opts: &ExtractOptions) -> Self {
        GridOptions {
            trim_content: opts.trim_content,
            content: if opts.text {
                ContentMode::Text
            } else {
                ContentMode::InnerHtml
            },
            strict: opts.strict,
        }
    }
}

#[cfg(feature = "wasm")]
fn default_true() -> bool {
    true
}

/// Resolution result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize)]
pub struct GridJsResult {
    /// The resolved value
    pub output: serde_json::Value,
    /// Whether resolution succeeded
    pub success: bool,
    /// Error message if resolution failed
    pub error: Option<String>,
    /// Layout warnings
    pub warnings: Vec<String>,
}

#[cfg(feature = "wasm")]
impl From<GridResult<Resolved<serde_json::Value>>> for GridJsResult {
    fn from(result: GridResult<Resolved<serde_json::Value>>) -> Self {
        match result {
            Ok(resolved) => GridJsResult {
                output: resolved.value,
                success: true,
                error: None,
                warnings: resolved.warnings.iter().map(|w| w.to_string()).collect(),
            },
            Err(e) => GridJsResult {
                output: serde_json::Value::Null,
                success: false,
                error: Some(e.to_string()),
                warnings: vec![],
            },
        }
    }
}

#[cfg(feature = "wasm")]
fn to_js(result: GridJsResult) -> JsValue {
    // Plain objects rather than JS Maps for nested records
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    result.serialize(&serializer).unwrap_or(JsValue::NULL)
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Resolve header rows (an array of arrays of column objects)
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "resolveHeader")]
pub fn resolve_header_wasm(columns: JsValue) -> JsValue {
    let result = serde_wasm_bindgen::from_value::<serde_json::Value>(columns)
        .map_err(|e| crate::GridError::invalid(e.to_string()))
        .and_then(crate::header_rows_from_value)
        .and_then(|rows| {
            let resolved = crate::resolve_header_indices(&rows);
            let json = serde_json::to_value(&resolved.value.rows)?;
            Ok(Resolved::with_warnings(json, resolved.warnings))
        });
    to_js(result.into())
}

/// Extract the body rows of a table into flat records
///
/// `columns` may be `null`/`undefined` to read the columns from `<thead>`.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "extractTable")]
pub fn extract_table_wasm(html: &str, columns: JsValue, options: JsValue) -> JsValue {
    let opts: ExtractOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();

    let columns: Option<Vec<ColumnDef>> = if columns.is_null() || columns.is_undefined() {
        None
    } else {
        match serde_wasm_bindgen::from_value(columns) {
            Ok(columns) => Some(columns),
            Err(e) => {
                let err = crate::GridError::invalid(format!("invalid columns: {}", e));
                return to_js(GridJsResult::from(Err(err)));
            }
        }
    };

    let result = crate::extract_rows_from_html(
        html,
        columns.as_deref(),
        opts.table_index,
        &GridOptions::from(&opts),
    )
    .map(|resolved| {
        let records = resolved
            .value
            .iter()
            .map(crate::RowRecord::to_json)
            .collect();
        Resolved::with_warnings(serde_json::Value::Array(records), resolved.warnings)
    });
    to_js(result.into())
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
