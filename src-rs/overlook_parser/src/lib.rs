//! Parser for the overlook dashboard configuration language.
//!
//! The configuration format is a small declarative text language that
//! names the remote hosts to poll (and at what cadence) and lays out
//! the metric boxes on screen. Parsing happens once, at startup, before
//! any polling or rendering begins: the raw text is split into
//! whitespace-delimited tokens, a cursor walks the token sequence, and
//! one statement parser per top-level keyword builds the configuration
//! tree. The first error aborts the whole parse.

use overlook_config::Config;

pub mod error;
pub mod token;

mod cursor;
use cursor::TokenCursor;

mod layout;
mod number;
mod servers;
mod waittime;

use error::ParserError;

/// Parses a complete configuration from its text
///
/// Empty input is a valid configuration: no servers, no layout, and the
/// default global waittime. Host addresses are copied into the returned
/// tree, so it does not borrow from `input`.
///
/// # Errors
///
/// Returns an error if the input contains an unknown or unexpected
/// token, a malformed or out-of-range number, a `servers` statement
/// with no hosts, or a second `layout` statement.
pub fn parse_config(input: &str) -> Result<Config, ParserError> {
    let tokens = token::tokenize(input);
    let mut cursor = TokenCursor::new(&tokens);
    let mut config = Config::new();

    while !cursor.is_at_end() {
        let keyword = *cursor.current()?;

        if cursor.accept("servers") {
            servers::parse(&mut cursor, &mut config, &keyword)?;
        } else if cursor.accept("layout") {
            layout::parse(&mut cursor, &mut config, &keyword)?;
        } else if cursor.accept("waittime") {
            waittime::parse(&mut cursor, &mut config)?;
        } else {
            return Err(ParserError::unknown_token(&keyword));
        }
    }

    Ok(config)
}
