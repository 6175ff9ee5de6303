use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{error, info};
use url::Url;

use crate::errors::SummaryError;

/// Builds the submissions-list URL for one user in one contest, e.g.
/// `https://atcoder.jp/contests/abc123/submissions?f.Task=&f.Language=&f.Status=&f.User=alice`.
pub fn submissions_url(
    base_url: &Url,
    contest_id: &str,
    at_coder_id: &str,
) -> Result<Url, SummaryError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|()| {
            SummaryError::ConfigError(format!("{} cannot be used as a base URL", base_url))
        })?
        .clear()
        .extend(["contests", contest_id, "submissions"]);
    url.query_pairs_mut()
        .clear()
        .append_pair("f.Task", "")
        .append_pair("f.Language", "")
        .append_pair("f.Status", "")
        .append_pair("f.User", at_coder_id);
    Ok(url)
}

/// Source of submissions-list markup.
#[async_trait]
pub trait SubmissionSource: Send + Sync {
    /// Origin used to build page URLs and to absolutize detail links.
    fn base_url(&self) -> &Url;

    async fn fetch_page(&self, url: &Url) -> Result<String, SummaryError>;
}

pub struct AtCoderClient {
    http: HttpClient,
    base_url: Url,
}

impl AtCoderClient {
    #[must_use]
    pub fn new(http: HttpClient, base_url: Url) -> Self {
        Self { http, base_url }
    }
}

#[async_trait]
impl SubmissionSource for AtCoderClient {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn fetch_page(&self, url: &Url) -> Result<String, SummaryError> {
        info!(url = %url, "Fetching AtCoder submissions page");
        let res = self.http.get(url.clone()).send().await?;

        if let Err(e) = res.error_for_status_ref() {
            error!(url = %url, "AtCoder returned an error response: {}", e);
            return Err(SummaryError::HttpError(format!(
                "error response from AtCoder submissions page {}: {}",
                url, e
            )));
        }

        Ok(res.text().await?)
    }
}
