//! HTML escaping

use std::borrow::Cow;

use serde_json::Value;

use crate::data::entities::escape_char;

/// Escape `& < > " ' \`` for interpolation into markup
///
/// Borrows the input when nothing needs escaping.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| escape_char(c).is_some()) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match escape_char(c) {
            Some(entity) => out.push_str(entity),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape string values; every other value passes through untouched
pub fn escape_value(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(escape_html(&s).into_owned()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>`"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;&#x60;"
        );
    }

    #[test]
    fn test_escape_borrows_clean_input() {
        assert!(matches!(escape_html("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_value() {
        assert_eq!(escape_value(json!("<b>")), json!("&lt;b&gt;"));
        assert_eq!(escape_value(json!(5)), json!(5));
        assert_eq!(escape_value(Value::Null), Value::Null);
    }
}
