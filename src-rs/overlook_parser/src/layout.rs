//! Parser for the `layout` statement and its box definitions.

use overlook_config::{Config, DrawArgs, DrawBox, DrawCategory, Layout};

use crate::{cursor::TokenCursor, error::ParserError, number, token::Token};

/// Option keywords for the quantitative categories that support the
/// quarter-minute bar graph
const SERIES_OPTIONS: &[(&str, DrawArgs)] = &[
    ("qmin_bars", DrawArgs::QMIN_BARS),
    ("qmin", DrawArgs::QMIN),
    ("min", DrawArgs::MIN),
    ("hour", DrawArgs::HOUR),
    ("day", DrawArgs::DAY),
    ("week", DrawArgs::WEEK),
    ("year", DrawArgs::YEAR),
];

/// Option keywords for the throughput categories (no bar graph)
const RATE_OPTIONS: &[(&str, DrawArgs)] = &[
    ("qmin", DrawArgs::QMIN),
    ("min", DrawArgs::MIN),
    ("hour", DrawArgs::HOUR),
    ("day", DrawArgs::DAY),
    ("week", DrawArgs::WEEK),
    ("year", DrawArgs::YEAR),
];

/// Option keywords for the link category
const LINK_OPTIONS: &[(&str, DrawArgs)] = &[
    ("ip", DrawArgs::IP),
    ("state", DrawArgs::STATE),
    ("access", DrawArgs::ACCESS),
];

/// The host-identity category accepts no option keywords
const NO_OPTIONS: &[(&str, DrawArgs)] = &[];

/// One row per category: keyword, category, legal options, fixed bits.
///
/// Each category recognizes only its own option table, so an option
/// keyword that is legal elsewhere is an unknown token here.
const BOX_TABLE: &[(&str, DrawCategory, &[(&str, DrawArgs)], DrawArgs)] = &[
    ("cpu", DrawCategory::Cpu, SERIES_OPTIONS, DrawArgs::EMPTY),
    ("mem", DrawCategory::Mem, SERIES_OPTIONS, DrawArgs::EMPTY),
    ("net", DrawCategory::Net, RATE_OPTIONS, DrawArgs::EMPTY),
    ("disc", DrawCategory::Disc, RATE_OPTIONS, DrawArgs::EMPTY),
    ("link", DrawCategory::Link, LINK_OPTIONS, DrawArgs::EMPTY),
    ("host", DrawCategory::Host, NO_OPTIONS, DrawArgs::ACCESS),
    (
        "nprocs",
        DrawCategory::Nprocs,
        SERIES_OPTIONS,
        DrawArgs::EMPTY,
    ),
    (
        "rprocs",
        DrawCategory::Rprocs,
        SERIES_OPTIONS,
        DrawArgs::EMPTY,
    ),
    (
        "nfiles",
        DrawCategory::Nfiles,
        SERIES_OPTIONS,
        DrawArgs::EMPTY,
    ),
];

/// `"layout" "{" layout-body "}" ";"`
///
/// The keyword has already been consumed by the driver loop; `keyword`
/// is its token, kept for error reporting. At most one layout statement
/// is permitted per configuration, and even an empty `layout { } ;`
/// marks the layout as present.
pub(crate) fn parse(
    cursor: &mut TokenCursor<'_>,
    config: &mut Config,
    keyword: &Token<'_>,
) -> Result<(), ParserError> {
    if config.has_layout() {
        return Err(ParserError::duplicate_section(keyword));
    }

    cursor.expect("{")?;

    let mut layout = Layout::new();

    while !cursor.is_at_end() && !cursor.check("}") {
        if cursor.accept("header") {
            layout.set_header();
        } else if cursor.accept("errlog") {
            let token = cursor.current()?;
            layout.set_errlog(number::parse_bounded(token, "layout errlog", 0)?);
            cursor.advance()?;
        } else if cursor.accept("host") {
            parse_host_boxes(cursor, &mut layout)?;
        } else {
            return Err(ParserError::unknown_token(cursor.current()?));
        }

        if cursor.check("}") {
            break;
        }
        cursor.expect(";")?;
        if cursor.check("}") {
            break;
        }
    }

    cursor.expect("}")?;
    cursor.expect(";")?;

    config.set_layout(layout);

    Ok(())
}

/// `"{" box-def (";" box-def)* "}"`
///
/// An empty block is legal and produces no boxes.
fn parse_host_boxes(cursor: &mut TokenCursor<'_>, layout: &mut Layout) -> Result<(), ParserError> {
    cursor.expect("{")?;

    while !cursor.is_at_end() && !cursor.check("}") {
        let draw_box = parse_box(cursor)?;
        layout.add_box(draw_box);

        if cursor.check("}") {
            break;
        }
        cursor.expect(";")?;
        if cursor.check("}") {
            break;
        }
    }

    cursor.expect("}")?;

    Ok(())
}

/// `category ( option )*`
///
/// The box accumulates option bits until `;` or `}`; a word that is
/// neither a legal option for this category nor a terminator fails the
/// parse.
fn parse_box(cursor: &mut TokenCursor<'_>) -> Result<DrawBox, ParserError> {
    for &(keyword, category, options, fixed) in BOX_TABLE {
        if cursor.accept(keyword) {
            let args = parse_box_options(cursor, options)?;
            return Ok(DrawBox::new(category, fixed | args));
        }
    }

    Err(ParserError::unknown_token(cursor.current()?))
}

fn parse_box_options(
    cursor: &mut TokenCursor<'_>,
    options: &[(&str, DrawArgs)],
) -> Result<DrawArgs, ParserError> {
    let mut args = DrawArgs::EMPTY;

    'tokens: while !cursor.is_at_end() {
        if cursor.check(";") || cursor.check("}") {
            break;
        }

        for &(keyword, flag) in options {
            if cursor.accept(keyword) {
                args.insert(flag);
                continue 'tokens;
            }
        }

        return Err(ParserError::unknown_token(cursor.current()?));
    }

    Ok(args)
}
