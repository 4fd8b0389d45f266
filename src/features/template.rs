//! `%s` string templating
//!
//! Only `%s` placeholders are recognised. A template that asks for more
//! arguments than it was given renders as an empty string, so callers can
//! tell "not enough data" apart from a rendered message.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde_json::Value;

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"%s").unwrap();
}

/// Render a JSON value the way it reads inside a message
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Substitute each `%s` with the next argument
///
/// Returns an empty string when any placeholder has no argument.
pub fn sprintf(template: &str, args: &[Value]) -> String {
    let mut next = 0;
    let mut complete = true;

    let rendered = PLACEHOLDER.replace_all(template, |_: &Captures| {
        let arg = args.get(next);
        next += 1;
        match arg {
            Some(value) => display_value(value),
            None => {
                complete = false;
                String::new()
            }
        }
    });

    if complete {
        rendered.into_owned()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sprintf_basic() {
        assert_eq!(
            sprintf("Showing %s to %s of %s rows", &[json!(1), json!(10), json!(57)]),
            "Showing 1 to 10 of 57 rows"
        );
        assert_eq!(sprintf("%s rows per page", &[json!("25")]), "25 rows per page");
    }

    #[test]
    fn test_sprintf_missing_argument() {
        assert_eq!(sprintf("%s of %s", &[json!(1)]), "");
    }

    #[test]
    fn test_sprintf_extra_arguments_and_no_placeholders() {
        assert_eq!(sprintf("%s", &[json!("a"), json!("b")]), "a");
        assert_eq!(sprintf("plain", &[]), "plain");
        assert_eq!(sprintf("", &[]), "");
    }

    #[test]
    fn test_sprintf_non_string_values() {
        assert_eq!(sprintf("%s/%s", &[json!(null), json!(true)]), "null/true");
    }
}
