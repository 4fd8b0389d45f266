//! Extraction options

use serde::{Deserialize, Serialize};

use crate::utils::error::GridResult;

/// What a record stores as a cell's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentMode {
    /// The cell's inner markup
    #[default]
    InnerHtml,
    /// The cell's text with markup removed
    Text,
}

/// Options for table extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    /// Trim surrounding whitespace from cell content
    pub trim_content: bool,
    /// Inner markup or plain text
    pub content: ContentMode,
    /// Fail on layout anomalies instead of collecting warnings
    pub strict: bool,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            trim_content: true,
            content: ContentMode::InnerHtml,
            strict: false,
        }
    }
}

impl GridOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject malformed span layouts
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Default::default()
        }
    }

    /// Extract plain text instead of markup
    pub fn text() -> Self {
        Self {
            content: ContentMode::Text,
            ..Default::default()
        }
    }

    /// Load options from a TOML document; missing keys keep their defaults
    pub fn from_toml_str(input: &str) -> GridResult<Self> {
        Ok(toml::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = GridOptions::default();
        assert!(opts.trim_content);
        assert_eq!(opts.content, ContentMode::InnerHtml);
        assert!(!opts.strict);
    }

    #[test]
    fn test_presets() {
        assert!(GridOptions::strict().strict);
        assert_eq!(GridOptions::text().content, ContentMode::Text);
    }

    #[test]
    fn test_from_toml() {
        let opts = GridOptions::from_toml_str("strict = true\ncontent = \"text\"\n").unwrap();
        assert!(opts.strict);
        assert!(opts.trim_content);
        assert_eq!(opts.content, ContentMode::Text);

        assert!(GridOptions::from_toml_str("strict = \"yes\"").is_err());
    }
}
