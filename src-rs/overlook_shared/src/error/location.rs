/// Source location information for error reporting
///
/// Line and column numbers are 1-indexed. The location also carries the
/// content of the offending line so the printer can quote it without
/// re-reading the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocation {
    /// Byte offset from the beginning of the file
    offset: usize,
    /// Line number (1-indexed)
    line: usize,
    /// Column number (1-indexed), after tab expansion
    column: usize,
    /// Length of the highlighted region in bytes
    length: Option<usize>,
    /// The source line the error occurred on, tabs expanded
    line_source: String,
}

/// Number of spaces a tab is displayed as
const TAB_WIDTH: usize = 4;

impl ErrorLocation {
    fn new(source: &str, offset: usize, length: Option<usize>) -> Self {
        // The offset may point one past the last character (for errors at
        // the very end of the input).
        assert!(
            offset <= source.len(),
            "offset ({offset}) must be within the source (length {})",
            source.len()
        );

        if let Some(length) = length {
            assert!(length > 0, "length must not be 0");
            assert!(
                offset + length <= source.len(),
                "highlighted region must be within the source"
            );
        }

        let line_start = source[..offset]
            .rfind('\n')
            .map_or(0, |newline_idx| newline_idx + 1);

        let line = source[..offset].chars().filter(|c| *c == '\n').count() + 1;

        // Tabs count as one byte but display as TAB_WIDTH columns, so the
        // displayed column widens by the difference for each tab before
        // the offset.
        let num_tabs = source[line_start..offset]
            .chars()
            .filter(|c| *c == '\t')
            .count();
        let column = (offset - line_start + 1) + num_tabs * (TAB_WIDTH - 1);

        let line_source = source[line_start..]
            .lines()
            .next()
            .unwrap_or("")
            .replace('\t', &" ".repeat(TAB_WIDTH));

        Self {
            offset,
            line,
            column,
            length,
            line_source,
        }
    }

    /// Creates an error location pointing at a single position
    #[must_use]
    pub fn from_source_and_offset(source: &str, offset: usize) -> Self {
        Self::new(source, offset, None)
    }

    /// Creates an error location highlighting a region of the source
    #[must_use]
    pub fn from_source_and_span(source: &str, offset: usize, length: usize) -> Self {
        Self::new(source, offset, Some(length))
    }

    /// Returns the byte offset from the beginning of the file
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the line number (1-indexed)
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the column number (1-indexed)
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the length of the highlighted region
    ///
    /// A location without an explicit length highlights one character.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length.unwrap_or(1)
    }

    /// Returns the content of the line the error occurred on
    #[must_use]
    pub fn line_source(&self) -> &str {
        &self.line_source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_on_first_line() {
        let source = "waittime 60 ;\nservers a ;\n";
        let location = ErrorLocation::from_source_and_offset(source, 9);
        assert_eq!(location.line(), 1);
        assert_eq!(location.column(), 10);
        assert_eq!(location.line_source(), "waittime 60 ;");
    }

    #[test]
    fn location_on_later_line() {
        let source = "waittime 60 ;\nservers a ;\n";
        let location = ErrorLocation::from_source_and_offset(source, 22);
        assert_eq!(location.line(), 2);
        assert_eq!(location.column(), 9);
        assert_eq!(location.line_source(), "servers a ;");
    }

    #[test]
    fn location_with_span() {
        let source = "servers alpha ;";
        let location = ErrorLocation::from_source_and_span(source, 8, 5);
        assert_eq!(location.length(), 5);
        assert_eq!(location.column(), 9);
    }

    #[test]
    fn location_expands_tabs() {
        let source = "\twaittime 60 ;";
        let location = ErrorLocation::from_source_and_offset(source, 1);
        assert_eq!(location.column(), 5);
        assert_eq!(location.line_source(), "    waittime 60 ;");
    }

    #[test]
    fn location_at_end_of_input() {
        let source = "servers";
        let location = ErrorLocation::from_source_and_offset(source, source.len());
        assert_eq!(location.line(), 1);
        assert_eq!(location.column(), 8);
    }
}
