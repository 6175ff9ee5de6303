/// AtCoder Summary - a Slack slash command that reports contest results.
///
/// `/atcoder 123 @alice @bob` answers with an empty acknowledgement, then
/// scrapes each member's AtCoder submissions for ABC 123, keeps the latest
/// submission per problem and posts a Block Kit summary to the channel.
///
/// # Architecture
///
/// - `api` acknowledges the Lambda request and hands off to a detached task
/// - `worker` resolves members, fans out the scraping and posts the reply
/// - `atcoder` fetches submissions pages, extracts rows and reduces them
/// - `identity` maps Slack user ids to AtCoder ids
/// - `slack` parses the command and renders blocks
///
/// # Example
///
/// ```
/// use atcoder_summary::slack::{build_summary_blocks, normalize};
///
/// let command = normalize("abc100").unwrap();
/// let blocks = build_summary_blocks(&command.contest_id, &[]);
/// assert_eq!(blocks.len(), 2);
/// ```
pub mod api;
pub mod atcoder;
pub mod core;
pub mod errors;
pub mod identity;
pub mod slack;
pub mod worker;

pub use errors::SummaryError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs. Call once before starting the Lambda runtime.
///
/// # Example
///
/// ```
/// atcoder_summary::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
