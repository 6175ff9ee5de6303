//! Turns free-form slash command text into a contest id and mentioned users.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::models::ContestCommand;
use crate::errors::SummaryError;

const CONTEST_PREFIX: &str = "abc";

static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<@((?-u:\w)+)\|(?-u:\w)+>$").expect("static regex compile"));

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '“' | '”' | '"' | '\'')
}

/// Extracts the user id from a Slack mention token such as `<@U123|alice>`.
pub fn parse_mention(token: &str) -> Result<String, SummaryError> {
    MENTION_RE
        .captures(token)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| SummaryError::ParseError(format!("Malformed user mention: {}", token)))
}

/// Normalizes command text: the first token is the contest id (short numeric
/// codes get the `abc` prefix), every remaining token must be a user mention.
///
/// # Examples
///
/// ```
/// use atcoder_summary::slack::normalizer::normalize;
///
/// let command = normalize("123 <@U1|Alice> <@U2|Bob>").unwrap();
/// assert_eq!(command.contest_id, "abc123");
/// assert_eq!(command.members, vec!["U1", "U2"]);
/// ```
pub fn normalize(text: &str) -> Result<ContestCommand, SummaryError> {
    let mut tokens = text.split(is_separator).filter(|t| !t.is_empty());

    let first = tokens
        .next()
        .ok_or_else(|| SummaryError::ParseError("Missing contest id".to_string()))?;
    let contest_id = if first.starts_with(CONTEST_PREFIX) {
        first.to_string()
    } else {
        format!("{}{}", CONTEST_PREFIX, first)
    };

    let members = tokens.map(parse_mention).collect::<Result<Vec<_>, _>>()?;

    Ok(ContestCommand {
        contest_id,
        members,
    })
}
