#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use atcoder_summary::SummaryError;
use atcoder_summary::atcoder::SubmissionSource;
use atcoder_summary::identity::{IdentityMap, IdentitySource};
use atcoder_summary::worker::deliver::ResponseSink;
use serde_json::Value;
use url::Url;

pub const BASE: &str = "https://atcoder.jp";

/// One submissions-table row in AtCoder's layout.
pub fn row(time: &str, title: &str, status: &str, submission_id: u64) -> String {
    format!(
        r#"<tr>
<td class="no-break"><time class="fixtime fixtime-second">{time}</time></td>
<td><a href="/contests/abc456/tasks/abc456_{task}">{title}</a></td>
<td><a href="/users/alice_ac">alice_ac</a> <a href="/contests/abc456/submissions?f.User=alice_ac"><span class="glyphicon glyphicon-search"></span></a></td>
<td><a href="/contests/abc456/submissions?f.Language=5001">C++ 20 (gcc 12.2)</a></td>
<td class="text-right submission-score">100</td>
<td class="text-right">250 Byte</td>
<td class="text-center"><span class="label label-success" title="Accepted">{status}</span></td>
<td class="text-right">1 ms</td>
<td class="text-right">3648 KB</td>
<td class="text-center"><a href="/contests/abc456/submissions/{submission_id}">Detail</a></td>
</tr>"#,
        task = title.chars().next().unwrap_or('a').to_ascii_lowercase(),
    )
}

pub fn page(rows: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html><html><body><div class="table-responsive">
<table class="table table-bordered table-striped small th-center">
<thead><tr><th>Submission Time</th><th>Task</th><th>User</th><th>Language</th><th>Score</th><th>Code Size</th><th>Status</th><th>Exec Time</th><th>Memory</th><th></th></tr></thead>
<tbody>{}</tbody>
</table></div></body></html>"#,
        rows.join("\n")
    )
}

/// Serves canned pages keyed by full URL and records every request.
pub struct FakePages {
    base: Url,
    pages: HashMap<String, String>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl FakePages {
    pub fn new(pages: &[(String, String)]) -> Self {
        Self {
            base: Url::parse(BASE).unwrap(),
            pages: pages.iter().cloned().collect(),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl SubmissionSource for FakePages {
    fn base_url(&self) -> &Url {
        &self.base
    }

    async fn fetch_page(&self, url: &Url) -> Result<String, SummaryError> {
        self.requested.lock().unwrap().push(url.to_string());
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| SummaryError::HttpError(format!("404 for {}", url)))
    }
}

/// Captures deferred replies instead of posting them.
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub posts: Arc<Mutex<Vec<(String, Value)>>>,
}

#[async_trait]
impl ResponseSink for RecordingSink {
    async fn post(&self, response_url: &str, payload: &Value) -> Result<(), SummaryError> {
        self.posts
            .lock()
            .unwrap()
            .push((response_url.to_string(), payload.clone()));
        Ok(())
    }
}

pub fn submissions_page_url(contest_id: &str, user: &str) -> String {
    format!(
        "https://atcoder.jp/contests/{}/submissions?f.Task=&f.Language=&f.Status=&f.User={}",
        contest_id, user
    )
}

/// Identity table that can never be loaded.
pub struct UnreachableIdentities;

#[async_trait]
impl IdentitySource for UnreachableIdentities {
    async fn load(&self) -> Result<IdentityMap, SummaryError> {
        Err(SummaryError::IdentityError("connection refused".to_string()))
    }
}

/// Sink whose webhook always rejects the post, recording each attempt.
#[derive(Clone, Default)]
pub struct RejectingSink {
    pub attempts: Arc<Mutex<usize>>,
}

#[async_trait]
impl ResponseSink for RejectingSink {
    async fn post(&self, _response_url: &str, _payload: &Value) -> Result<(), SummaryError> {
        *self.attempts.lock().unwrap() += 1;
        Err(SummaryError::HttpError("response_url returned 404 Not Found".to_string()))
    }
}
