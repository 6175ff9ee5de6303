use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::Value;
use tracing::error;

use crate::errors::SummaryError;

/// Destination of the deferred slash command reply.
#[async_trait]
pub trait ResponseSink: Send + Sync {
    async fn post(&self, response_url: &str, payload: &Value) -> Result<(), SummaryError>;
}

/// Posts payloads to Slack's `response_url` webhook.
pub struct HttpResponseSink {
    http: HttpClient,
}

impl HttpResponseSink {
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ResponseSink for HttpResponseSink {
    async fn post(&self, response_url: &str, payload: &Value) -> Result<(), SummaryError> {
        let resp = self.http.post(response_url).json(payload).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body_text = resp
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read body>".to_string());
            error!(
                "response_url POST failed: status={} body={}",
                status, body_text
            );
            return Err(SummaryError::HttpError(format!(
                "response_url returned {}",
                status
            )));
        }
        Ok(())
    }
}
