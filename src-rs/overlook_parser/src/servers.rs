//! Parser for the `servers` statement.

use overlook_config::{Config, ServerEntry, config::MIN_WAITTIME};

use crate::{cursor::TokenCursor, error::ParserError, number, token::Token};

/// `"servers" s1 [s2 ...] ["{" server-args "}"] ";"`
///
/// The keyword has already been consumed by the driver loop; `keyword`
/// is its token, kept for error reporting. Every host token becomes one
/// new entry, its address copied out of the parse buffer at the point
/// of consumption.
pub(crate) fn parse(
    cursor: &mut TokenCursor<'_>,
    config: &mut Config,
    keyword: &Token<'_>,
) -> Result<(), ParserError> {
    let mut count = 0;

    while !cursor.is_at_end() && !cursor.check(";") && !cursor.check("{") {
        let address = cursor.current()?.text().to_string();
        config.add_server(ServerEntry::new(address));
        count += 1;

        if cursor.advance().is_err() {
            // Ran off the end of the input; reported below, after the
            // empty-statement check.
            break;
        }
    }

    if count == 0 {
        return Err(ParserError::empty_server_list(keyword));
    }

    // A terminator must follow the host list.
    cursor.current()?;

    if cursor.accept("{") {
        parse_server_args(cursor, config, count)?;
    }

    cursor.expect(";")?;

    Ok(())
}

/// `( "waittime" num ";"? )* "}"`
///
/// Only `waittime` is recognized inside the block; the separator after
/// the value is optional by design. When the block closes with a
/// waittime, it is applied retroactively to the `count` hosts declared
/// by the enclosing statement — never to hosts from earlier statements.
fn parse_server_args(
    cursor: &mut TokenCursor<'_>,
    config: &mut Config,
    count: usize,
) -> Result<(), ParserError> {
    let mut waittime = None;

    while !cursor.is_at_end() && !cursor.check("}") {
        if cursor.accept("waittime") {
            let token = cursor.current()?;
            waittime = Some(number::parse_bounded(token, "server waittime", MIN_WAITTIME)?);
            cursor.advance()?;
            let _ = cursor.accept(";");
        } else {
            return Err(ParserError::unknown_token(cursor.current()?));
        }
    }

    cursor.expect("}")?;

    if let Some(waittime) = waittime {
        config.apply_waittime_to_last(count, waittime);
    }

    Ok(())
}
