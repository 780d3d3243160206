//! Source locations and spans for mapping parsed data back to the
//! configuration text

/// A position in the configuration text
///
/// The offset is the byte offset from the beginning of the text and is
/// the authoritative value; the line and column are derived from it and
/// are only used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Byte offset from the beginning of the text (0-indexed)
    pub offset: usize,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// A contiguous region of the configuration text
///
/// A span is a pair of locations marking where a token starts and where
/// it ends (exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: SourceLocation,
    end: SourceLocation,
}

impl Span {
    /// Creates a new span from a start and end location
    ///
    /// # Panics
    ///
    /// Panics if the end location comes before the start location.
    #[must_use]
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        assert!(
            start.offset <= end.offset,
            "span start must not come after span end"
        );

        Self { start, end }
    }

    /// Returns the start location
    #[must_use]
    pub const fn start(&self) -> SourceLocation {
        self.start
    }

    /// Returns the end location (exclusive)
    #[must_use]
    pub const fn end(&self) -> SourceLocation {
        self.end
    }

    /// Returns the length of the span in bytes
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    /// Returns whether the span covers no text at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(offset: usize, line: usize, column: usize) -> SourceLocation {
        SourceLocation {
            offset,
            line,
            column,
        }
    }

    #[test]
    fn span_length() {
        let span = Span::new(loc(4, 1, 5), loc(9, 1, 10));
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
    }

    #[test]
    fn empty_span() {
        let span = Span::new(loc(3, 1, 4), loc(3, 1, 4));
        assert!(span.is_empty());
    }

    #[test]
    #[should_panic(expected = "span start must not come after span end")]
    fn reversed_span_panics() {
        let _ = Span::new(loc(5, 1, 6), loc(2, 1, 3));
    }
}
