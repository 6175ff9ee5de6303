use futures::future::join_all;
use tracing::info;

use crate::atcoder::{SubmissionSource, parse_submissions, submissions_url, summarize};
use crate::core::models::UserResult;
use crate::errors::SummaryError;

/// Fetches, extracts and reduces one member's submissions for a contest.
pub async fn scrape_user_result(
    source: &dyn SubmissionSource,
    contest_id: &str,
    member: &str,
) -> Result<UserResult, SummaryError> {
    let url = submissions_url(source.base_url(), contest_id, member)?;
    let html = source.fetch_page(&url).await?;
    let records = parse_submissions(&html, source.base_url())?;
    info!(
        member = %member,
        contest_id = %contest_id,
        rows = records.len(),
        "Extracted submissions"
    );

    Ok(UserResult {
        member: member.to_string(),
        user_page: url.to_string(),
        result_summary: summarize(records),
    })
}

/// Runs every member's pipeline concurrently and waits for all of them.
///
/// Results keep the order of `members`. Any failed member fails the whole
/// contest summary; there is no partial output.
pub async fn summarize_contest(
    source: &dyn SubmissionSource,
    contest_id: &str,
    members: &[String],
) -> Result<Vec<UserResult>, SummaryError> {
    join_all(
        members
            .iter()
            .map(|member| scrape_user_result(source, contest_id, member)),
    )
    .await
    .into_iter()
    .collect()
}
