//! Parser for the global `waittime` statement.

use overlook_config::{Config, config::MIN_WAITTIME};

use crate::{cursor::TokenCursor, error::ParserError, number};

/// `"waittime" num ";"`
///
/// The keyword has already been consumed by the driver loop.
pub(crate) fn parse(cursor: &mut TokenCursor<'_>, config: &mut Config) -> Result<(), ParserError> {
    let token = cursor.current()?;
    let waittime = number::parse_bounded(token, "global waittime", MIN_WAITTIME)?;
    config.set_waittime(waittime);

    cursor.advance()?;
    cursor.expect(";")?;

    Ok(())
}
