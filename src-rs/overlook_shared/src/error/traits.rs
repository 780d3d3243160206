use crate::error::{Context, ErrorLocation};

/// Trait for error types that can be rendered as overlook diagnostics
///
/// Parser and loader errors implement this so the command-line
/// front-end can display them uniformly, with or without the file text
/// at hand.
pub trait AsOverlookError {
    /// Returns the primary error message
    ///
    /// The message should name the offending or expected token so the
    /// error can be located even when no source text is available.
    fn message(&self) -> String;

    /// Returns additional notes and help text for the error
    ///
    /// Returns an empty vector if no context is available.
    fn context(&self) -> Vec<Context> {
        vec![]
    }

    /// Returns the location of the error within the given source text
    ///
    /// Errors without a meaningful position (such as I/O failures)
    /// return `None`.
    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        let _ = source;
        None
    }
}
