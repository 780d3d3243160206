//! Tokenizer for the configuration language.
//!
//! The format is whitespace-tokenized: a token is a maximal run of
//! non-whitespace bytes, where whitespace is space, tab, carriage
//! return, or newline. The tokenizer performs no punctuation-aware
//! splitting — `{`, `}` and `;` are grammar symbols only when they
//! stand alone as their own whitespace-separated word, so `host{` is a
//! single token while `host {` is two. This is a documented limitation
//! of the format, kept because existing configuration files rely on it.

use nom::{
    IResult, Parser as _,
    bytes::complete::{take_till1, take_while},
    sequence::preceded,
};
use nom_locate::LocatedSpan;
use overlook_shared::span::{SourceLocation, Span};

/// A span of configuration text, tracked with source positions
pub type InputSpan<'a> = LocatedSpan<&'a str>;

/// One whitespace-delimited word of the configuration text
///
/// The text borrows from the buffer being parsed; anything that must
/// outlive the parse (server addresses) is copied out at the point of
/// consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    text: &'a str,
    span: Span,
}

impl<'a> Token<'a> {
    /// Returns the token text, which borrows from the parsed input
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Returns where the token sits in the configuration text
    #[must_use]
    pub const fn span(&self) -> Span {
        self.span
    }

    fn from_lexeme(lexeme: &InputSpan<'a>) -> Token<'a> {
        let text = *lexeme.fragment();

        let line = usize::try_from(lexeme.location_line())
            .expect("usize should be greater than or equal to u32");
        let start = SourceLocation {
            offset: lexeme.location_offset(),
            line,
            column: lexeme.get_column(),
        };

        // A token never contains whitespace, so it never crosses a line.
        let end = SourceLocation {
            offset: start.offset + text.len(),
            line,
            column: start.column + text.len(),
        };

        Token {
            text,
            span: Span::new(start, end),
        }
    }
}

fn is_config_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

fn whitespace(input: InputSpan<'_>) -> IResult<InputSpan<'_>, InputSpan<'_>> {
    take_while(is_config_whitespace).parse(input)
}

fn word(input: InputSpan<'_>) -> IResult<InputSpan<'_>, InputSpan<'_>> {
    take_till1(is_config_whitespace).parse(input)
}

/// Splits configuration text into its whitespace-delimited tokens
///
/// Tokenization itself cannot fail: any non-whitespace run is a valid
/// token. Empty or whitespace-only input yields no tokens.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut rest = InputSpan::new(input);
    let mut tokens = Vec::new();

    while let Ok((after, lexeme)) = preceded(whitespace, word).parse(rest) {
        tokens.push(Token::from_lexeme(&lexeme));
        rest = after;
    }

    tokens
}
