//! Bounded numeric parsing for configuration values.

use crate::{error::ParserError, token::Token};

/// Parses a token as an integer no smaller than `min`
///
/// There is no silent coercion: a malformed number or one below the
/// bound fails the whole parse. `what` names the value being configured
/// so the error message can say which statement rejected it.
pub(crate) fn parse_bounded(
    token: &Token<'_>,
    what: &'static str,
    min: u32,
) -> Result<u32, ParserError> {
    match token.text().parse::<u32>() {
        Ok(value) if value >= min => Ok(value),
        Ok(_) | Err(_) => Err(ParserError::invalid_range(what, token, min)),
    }
}
