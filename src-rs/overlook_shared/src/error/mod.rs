//! Unified error reporting for the overlook dashboard

mod context;
mod location;
mod traits;

use std::path::PathBuf;

pub use context::Context;
pub use location::ErrorLocation;
pub use traits::AsOverlookError;

/// Unified error representation for overlook
///
/// Errors from the parser and the loader are converted into this form
/// before display. It carries the source identifier (the configuration
/// file path), a human-readable message, an optional location within
/// the file, and optional context notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlookError {
    /// The path of the configuration file the error refers to
    path: PathBuf,
    /// Human-readable error message
    message: String,
    /// Location within the file, when the error has one
    location: Option<ErrorLocation>,
    /// Additional notes and help text
    context: Vec<Context>,
}

impl OverlookError {
    /// Creates an error without source location information
    ///
    /// Use [`OverlookError::from_error_with_source`] when the file text
    /// is available, so the error can point at the offending token.
    pub fn from_error(error: &impl AsOverlookError, path: PathBuf) -> Self {
        Self {
            path,
            message: error.message(),
            location: None,
            context: error.context(),
        }
    }

    /// Creates an error with a location computed from the file text
    pub fn from_error_with_source(
        error: &impl AsOverlookError,
        path: PathBuf,
        source: &str,
    ) -> Self {
        Self {
            path,
            message: error.message(),
            location: error.error_location(source),
            context: error.context(),
        }
    }

    /// Returns the path of the file the error refers to
    #[must_use]
    pub const fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Returns the human-readable error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the location within the file, if the error has one
    #[must_use]
    pub const fn location(&self) -> Option<&ErrorLocation> {
        self.location.as_ref()
    }

    /// Returns the context notes attached to the error
    #[must_use]
    pub fn context(&self) -> &[Context] {
        &self.context
    }
}
