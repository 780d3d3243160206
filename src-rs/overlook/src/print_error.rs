//! Error message formatting and display
//!
//! Renders unified overlook errors in the usual compiler shape:
//!
//! ```text
//! error: expected `;`, have `host{`
//!  --> /home/user/.overlook.conf:4:3
//!   |
//! 4 |   host{ cpu hour }
//!   |   ^^^^^
//!   = help: `{`, `}` and `;` count as tokens only when separated by whitespace
//! ```

use anstream::eprintln;
use overlook_shared::error::{Context, OverlookError};

use crate::stylesheet::Stylesheet;

/// Prints a formatted error message to standard error
pub fn print(error: &OverlookError, styles: &Stylesheet) {
    eprintln!("{}", error_to_string(error, styles));
}

fn error_to_string(error: &OverlookError, styles: &Stylesheet) -> String {
    let mut lines = vec![
        get_message_line(error.message(), styles),
        get_location_line(error, styles),
    ];
    lines.extend(get_source_lines(error, styles));
    lines.extend(get_context_lines(error.context(), styles));

    lines.join("\n")
}

/// `error: <message>`
fn get_message_line(message: &str, styles: &Stylesheet) -> String {
    let kind = styles.error.style("error");
    let line = format!("{kind}: {message}");
    styles.emphasis.style(line).to_string()
}

/// ` --> <path>` or ` --> <path>:<line>:<column>`
fn get_location_line(error: &OverlookError, styles: &Stylesheet) -> String {
    let arrow = styles.source_annotation.style("-->");
    let path = error.path().display();

    error.location().map_or_else(
        || format!(" {arrow} {path}"),
        |location| format!(" {arrow} {path}:{}:{}", location.line(), location.column()),
    )
}

/// The quoted source line with a caret under the offending token
fn get_source_lines(error: &OverlookError, styles: &Stylesheet) -> Vec<String> {
    let Some(location) = error.location() else {
        return vec![];
    };

    let line_number = location.line().to_string();
    let gutter = " ".repeat(line_number.len());
    let bar = styles.source_annotation.style("|");

    let carets = "^".repeat(location.length().max(1));
    let caret_indent = " ".repeat(location.column().saturating_sub(1));
    let carets = styles.error.style(format!("{caret_indent}{carets}"));

    vec![
        format!("{gutter} {bar}"),
        format!(
            "{} {bar} {}",
            styles.source_annotation.style(&line_number),
            location.line_source()
        ),
        format!("{gutter} {bar} {carets}"),
    ]
}

/// `  = note: …` and `  = help: …` trailers
fn get_context_lines(context: &[Context], styles: &Stylesheet) -> Vec<String> {
    context
        .iter()
        .map(|item| {
            let (kind, message) = match item {
                Context::Note(message) => (styles.note.style("note"), message),
                Context::Help(message) => (styles.help.style("help"), message),
            };
            format!("  = {kind}: {message}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use overlook_shared::error::{AsOverlookError, ErrorLocation};

    struct PositionalError;

    impl AsOverlookError for PositionalError {
        fn message(&self) -> String {
            "unknown token `host{`".to_string()
        }

        fn error_location(&self, source: &str) -> Option<ErrorLocation> {
            Some(ErrorLocation::from_source_and_span(source, 9, 5))
        }

        fn context(&self) -> Vec<Context> {
            vec![Context::Help("separate punctuation with whitespace".to_string())]
        }
    }

    #[test]
    fn renders_location_caret_and_context() {
        let source = "layout { host{ } ;";
        let error = OverlookError::from_error_with_source(
            &PositionalError,
            "overlook.conf".into(),
            source,
        );

        let rendered = error_to_string(&error, &Stylesheet::new(false));
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines[0], "error: unknown token `host{`");
        assert_eq!(lines[1], " --> overlook.conf:1:10");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "1 | layout { host{ } ;");
        assert_eq!(lines[4], "  |          ^^^^^");
        assert_eq!(
            lines[5],
            "  = help: separate punctuation with whitespace"
        );
    }
}
