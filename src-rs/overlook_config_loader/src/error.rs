//! Errors from loading a configuration.

use std::{fmt, io, path::PathBuf};

use overlook_parser::error::ParserError;
use overlook_shared::error::{AsOverlookError, OverlookError};

/// An error that occurred while loading the configuration
///
/// A missing configuration file is not an error — it triggers the
/// command-line fallback instead.
#[derive(Debug)]
pub enum LoadError {
    /// The file exists but could not be read
    Io {
        /// The configuration file path
        path: PathBuf,
        /// The underlying I/O failure
        source: io::Error,
    },
    /// The file was read but its content was rejected by the parser
    Parse {
        /// The configuration file path
        path: PathBuf,
        /// The file content, kept so the error can point into it
        source_text: String,
        /// The parse failure
        error: ParserError,
    },
}

impl LoadError {
    /// Converts the error into the unified form the front-end displays
    ///
    /// Parse errors carry the file text, so the report includes the
    /// offending line and a caret under the offending token.
    #[must_use]
    pub fn to_report(&self) -> OverlookError {
        match self {
            Self::Io { path, source } => {
                OverlookError::from_error(&IoReport(source), path.clone())
            }
            Self::Parse {
                path,
                source_text,
                error,
            } => OverlookError::from_error_with_source(error, path.clone(), source_text),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Parse { path, error, .. } => write!(f, "{}: {error}", path.display()),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { error, .. } => Some(error),
        }
    }
}

/// Adapter that renders an I/O failure as an overlook diagnostic
struct IoReport<'a>(&'a io::Error);

impl AsOverlookError for IoReport<'_> {
    fn message(&self) -> String {
        self.0.to_string()
    }
}
