//! Detailed reasons for configuration parse errors.

/// The different kinds of errors that can occur during parsing
///
/// Each variant carries the tokens involved, so the error can be
/// located even when the file text is no longer at hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserErrorReason {
    /// The input ended where the grammar required another token
    UnexpectedEof,
    /// Found a token other than the one the grammar required
    UnexpectedToken {
        /// The token the grammar required at this position
        expected: &'static str,
        /// The token found instead, or `None` when the input ended
        found: Option<String>,
    },
    /// Found a token the grammar does not recognize at this position
    UnknownToken {
        /// The unrecognized token
        found: String,
    },
    /// A numeric value was malformed or outside its permitted bound
    InvalidRange {
        /// What the number configures (for the error message)
        what: &'static str,
        /// The offending token text
        value: String,
        /// The smallest accepted value
        min: u32,
    },
    /// A `servers` statement declared no hosts
    EmptyServerList,
    /// A second `layout` statement was declared
    DuplicateSection,
}
