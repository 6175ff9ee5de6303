//! Block Kit rendering of per-user contest summaries.

use serde_json::{Value, json};

use crate::core::models::{SubmissionRecord, UserResult};

/// Label of the link to a submission's code view.
pub const SUBMISSION_LINK_LABEL: &str = "提出コード";

#[must_use]
pub fn divider() -> Value {
    json!({ "type": "divider" })
}

#[must_use]
pub fn header_block(contest_id: &str) -> Value {
    json!({
        "type": "section",
        "text": {
            "type": "plain_text",
            "text": format!("{} Result Summary", contest_id.to_uppercase()),
            "emoji": true
        }
    })
}

/// Renders one line item, e.g.
/// `alice - A - Foo / :AC: / 2024-01-01 12:00:00 / <https://...|提出コード>`.
#[must_use]
pub fn submission_line(member: &str, record: &SubmissionRecord) -> String {
    format!(
        "{} - {} / :{}: / {} / <{}|{}>",
        member,
        record.title,
        record.status,
        record.time.format("%Y-%m-%d %H:%M:%S"),
        record.detail,
        SUBMISSION_LINK_LABEL
    )
}

fn user_blocks(result: &UserResult) -> Vec<Value> {
    result
        .result_summary
        .values()
        .map(|record| {
            json!({
                "type": "section",
                "text": {
                    "type": "mrkdwn",
                    "text": submission_line(&result.member, record)
                }
            })
        })
        .collect()
}

/// Builds the full block list: header, divider, then one group per user with
/// results, groups separated by a single divider.
///
/// Users whose summary is empty contribute nothing, not even a divider.
#[must_use]
pub fn build_summary_blocks(contest_id: &str, results: &[UserResult]) -> Vec<Value> {
    let groups: Vec<Vec<Value>> = results
        .iter()
        .map(user_blocks)
        .filter(|group| !group.is_empty())
        .collect();

    let mut blocks = vec![header_block(contest_id), divider()];
    for (i, group) in groups.into_iter().enumerate() {
        if i > 0 {
            blocks.push(divider());
        }
        blocks.extend(group);
    }
    blocks
}

/// Wraps blocks in a `response_url` payload visible to the whole channel.
#[must_use]
pub fn create_in_channel_payload(blocks: Vec<Value>) -> Value {
    json!({
        "response_type": "in_channel",
        "blocks": blocks
    })
}
