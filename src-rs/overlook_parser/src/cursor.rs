//! Position pointer over the token sequence.
//!
//! Every grammar rule is written against the five primitives defined
//! here — existence check, advance, equality check, accept, expect —
//! and never against raw token indices.

use crate::{error::ParserError, token::Token};

/// A cursor over the tokenized configuration text
#[derive(Debug)]
pub(crate) struct TokenCursor<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    /// Creates a cursor positioned at the first token
    pub(crate) const fn new(tokens: &'a [Token<'a>]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Returns whether every token has been consumed
    pub(crate) const fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Offset reported for errors at the end of input: just past the
    /// last token, or the beginning of an empty input.
    fn eof_offset(&self) -> usize {
        self.tokens
            .last()
            .map_or(0, |token| token.span().end().offset)
    }

    /// Returns the current token, failing if the input has ended
    pub(crate) fn current(&self) -> Result<&Token<'a>, ParserError> {
        self.tokens
            .get(self.pos)
            .ok_or_else(|| ParserError::unexpected_eof(self.eof_offset()))
    }

    /// Moves to the next token, failing if the input ends there
    pub(crate) fn advance(&mut self) -> Result<(), ParserError> {
        self.pos += 1;
        self.current()?;
        Ok(())
    }

    /// Returns whether the current token equals `word`
    ///
    /// Returns false at the end of input.
    pub(crate) fn check(&self, word: &str) -> bool {
        self.tokens
            .get(self.pos)
            .is_some_and(|token| token.text() == word)
    }

    /// Consumes the current token if it equals `word`
    pub(crate) fn accept(&mut self, word: &str) -> bool {
        if self.check(word) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Requires the current token to equal `word` and consumes it
    pub(crate) fn expect(&mut self, word: &'static str) -> Result<(), ParserError> {
        match self.tokens.get(self.pos) {
            Some(token) if token.text() == word => {
                self.pos += 1;
                Ok(())
            }
            Some(token) => Err(ParserError::unexpected_token(word, token)),
            None => Err(ParserError::unexpected_end_expecting(
                word,
                self.eof_offset(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::reason::ParserErrorReason, token::tokenize};

    #[test]
    fn walks_tokens_in_order() {
        let tokens = tokenize("a b c");
        let mut cursor = TokenCursor::new(&tokens);

        assert!(!cursor.is_at_end());
        assert_eq!(cursor.current().expect("should have a token").text(), "a");

        cursor.advance().expect("should advance to `b`");
        assert_eq!(cursor.current().expect("should have a token").text(), "b");

        cursor.advance().expect("should advance to `c`");
        assert!(cursor.advance().is_err());
    }

    #[test]
    fn current_fails_at_end_of_input() {
        let tokens = tokenize("");
        let cursor = TokenCursor::new(&tokens);

        let error = cursor.current().expect_err("should fail on empty input");
        assert_eq!(*error.reason(), ParserErrorReason::UnexpectedEof);
        assert_eq!(error.offset(), 0);
    }

    #[test]
    fn check_does_not_consume() {
        let tokens = tokenize("servers ;");
        let mut cursor = TokenCursor::new(&tokens);

        assert!(cursor.check("servers"));
        assert!(cursor.check("servers"));
        assert!(!cursor.check(";"));

        assert!(cursor.accept("servers"));
        assert!(cursor.check(";"));
    }

    #[test]
    fn accept_consumes_only_on_match() {
        let tokens = tokenize("{ }");
        let mut cursor = TokenCursor::new(&tokens);

        assert!(!cursor.accept("}"));
        assert!(cursor.accept("{"));
        assert!(cursor.accept("}"));
        assert!(cursor.is_at_end());
        assert!(!cursor.accept("{"));
    }

    #[test]
    fn expect_reports_the_found_token() {
        let tokens = tokenize("waittime 60 }");
        let mut cursor = TokenCursor::new(&tokens);
        cursor.advance().expect("should advance to `60`");
        cursor.advance().expect("should advance to `}`");

        let error = cursor.expect(";").expect_err("should reject `}`");
        assert_eq!(
            *error.reason(),
            ParserErrorReason::UnexpectedToken {
                expected: ";",
                found: Some("}".to_string()),
            }
        );
    }

    #[test]
    fn expect_reports_end_of_input() {
        let tokens = tokenize("waittime");
        let mut cursor = TokenCursor::new(&tokens);
        assert!(cursor.accept("waittime"));

        let error = cursor.expect(";").expect_err("should fail at end of input");
        assert_eq!(
            *error.reason(),
            ParserErrorReason::UnexpectedToken {
                expected: ";",
                found: None,
            }
        );
        assert_eq!(error.offset(), 8);
    }
}
