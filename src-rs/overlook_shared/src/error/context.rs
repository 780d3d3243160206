/// Contextual information attached to an error message
///
/// Context items are rendered after the main error message and help the
/// user understand or fix the problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Additional information about the error
    ///
    /// For example: "the first `layout` section was accepted earlier in
    /// the file".
    Note(String),

    /// An actionable suggestion for resolving the error
    ///
    /// For example: "separate `{`, `}` and `;` from neighboring words
    /// with whitespace".
    Help(String),
}
