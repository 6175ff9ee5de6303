use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One row of an AtCoder submissions list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub time: DateTime<Utc>,
    /// Problem label as shown on the page, e.g. `A - Welcome to AtCoder`.
    pub title: String,
    pub status: String,
    /// Absolute URL of the submission's code view.
    pub detail: String,
}

impl SubmissionRecord {
    /// Problem short-code, the first character of the title.
    #[must_use]
    pub fn problem_code(&self) -> Option<char> {
        self.title.chars().next()
    }
}

/// Latest submission per problem short-code. Iterates in code order.
pub type ResultSummary = BTreeMap<char, SubmissionRecord>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserResult {
    pub member: String,
    pub user_page: String,
    pub result_summary: ResultSummary,
}

/// Normalized slash command arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContestCommand {
    pub contest_id: String,
    /// Slack user ids mentioned after the contest id.
    pub members: Vec<String>,
}

/// One row of the remote identity table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityEntry {
    pub slack_user_id: String,
    pub at_coder_id: String,
}
