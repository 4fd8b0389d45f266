//! HTML entity table used by the escaping helpers

use phf::phf_map;

/// Characters escaped for safe interpolation into markup and attributes
pub static HTML_ESCAPES: phf::Map<char, &'static str> = phf_map! {
    '&' => "&amp;",
    '<' => "&lt;",
    '>' => "&gt;",
    '"' => "&quot;",
    '\'' => "&#039;",
    '`' => "&#x60;",
};

/// Look up the entity for a character, if it needs escaping
pub fn escape_char(c: char) -> Option<&'static str> {
    HTML_ESCAPES.get(&c).copied()
}
