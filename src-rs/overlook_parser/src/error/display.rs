use crate::error::reason::ParserErrorReason;

pub(super) fn reason_to_string(reason: &ParserErrorReason) -> String {
    match reason {
        ParserErrorReason::UnexpectedEof => "unexpected end of input".to_string(),
        ParserErrorReason::UnexpectedToken {
            expected,
            found: Some(found),
        } => {
            format!("expected `{expected}`, have `{found}`")
        }
        ParserErrorReason::UnexpectedToken {
            expected,
            found: None,
        } => {
            format!("expected `{expected}`, have end of input")
        }
        ParserErrorReason::UnknownToken { found } => format!("unknown token `{found}`"),
        ParserErrorReason::InvalidRange { what, value, min } => {
            format!(
                "bad {what}: `{value}` is not a number between {min} and {}",
                u32::MAX
            )
        }
        ParserErrorReason::EmptyServerList => "no servers in statement".to_string(),
        ParserErrorReason::DuplicateSection => "layout already specified".to_string(),
    }
}
