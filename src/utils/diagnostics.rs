//! Terminal formatting for layout warnings

use super::error::{GridWarning, WarningKind};

/// Format collected warnings for display, one per line, with a summary
pub fn format_warnings(warnings: &[GridWarning], use_color: bool) -> String {
    let mut output = String::new();

    for warning in warnings {
        if use_color {
            let color = match warning.kind {
                WarningKind::MissingColumn | WarningKind::RowOverflow => "\x1b[31m", // Red
                WarningKind::SpanClipped | WarningKind::InvalidSpan => "\x1b[33m",   // Yellow
            };
            output.push_str(color);
            output.push_str(&format!("warning: {}", warning));
            output.push_str("\x1b[0m\n");
        } else {
            output.push_str(&format!("warning: {}\n", warning));
        }
    }

    if use_color {
        output.push_str(if warnings.is_empty() {
            "\x1b[32m"
        } else {
            "\x1b[33m"
        });
    }

    output.push_str(&format!("Summary: {} warning(s)", warnings.len()));

    if use_color {
        output.push_str("\x1b[0m");
    }

    output
}
