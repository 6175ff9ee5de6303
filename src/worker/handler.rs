//! Deferred phase of a slash command: everything after the acknowledgement.

use std::sync::Arc;

use reqwest::Client as HttpClient;
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{Instrument, error, info, info_span};

use super::deliver::{HttpResponseSink, ResponseSink};
use super::summarize::summarize_contest;
use crate::atcoder::{AtCoderClient, SubmissionSource};
use crate::core::config::AppConfig;
use crate::errors::SummaryError;
use crate::identity::{self, IdentitySource};
use crate::slack::{SlashCommandPayload, build_summary_blocks, create_in_channel_payload, normalize};

/// The pipeline's external dependencies.
pub struct SummaryService {
    identities: Box<dyn IdentitySource>,
    submissions: Box<dyn SubmissionSource>,
    responder: Box<dyn ResponseSink>,
}

impl SummaryService {
    #[must_use]
    pub fn new(
        identities: Box<dyn IdentitySource>,
        submissions: Box<dyn SubmissionSource>,
        responder: Box<dyn ResponseSink>,
    ) -> Self {
        Self {
            identities,
            submissions,
            responder,
        }
    }

    /// Wires the HTTP-backed implementations over one shared client.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let http = HttpClient::new();
        Self::new(
            identity::source_for(&config.identity_table, http.clone()),
            Box::new(AtCoderClient::new(http.clone(), config.atcoder_base_url.clone())),
            Box::new(HttpResponseSink::new(http)),
        )
    }

    /// Builds the contest summary for a slash command and posts it to the
    /// command's `response_url`. Returns the posted payload.
    pub async fn run(&self, command: &SlashCommandPayload) -> Result<Value, SummaryError> {
        let normalized = normalize(&command.text)?;
        info!(
            contest_id = %normalized.contest_id,
            mentions = ?normalized.members,
            "Normalized slash command"
        );

        let identities = self.identities.load().await?;
        let members = identities.resolve(&normalized.members);
        info!(members = ?members, "Resolved AtCoder ids");

        let results =
            summarize_contest(self.submissions.as_ref(), &normalized.contest_id, &members).await?;

        let blocks = build_summary_blocks(&normalized.contest_id, &results);
        let payload = create_in_channel_payload(blocks);
        self.responder.post(&command.response_url, &payload).await?;

        Ok(payload)
    }
}

/// Runs [`SummaryService::run`] as a detached task.
///
/// Failures end here: they are logged and never reach the user, who has
/// already received the acknowledgement.
///
/// On AWS Lambda the execution environment is frozen as soon as the handler
/// returns, so a task still running at that point resumes only when the
/// environment is thawed for the next invocation. Delivery of the summary can
/// therefore lag until the function is invoked again.
pub fn spawn_summary(
    service: Arc<SummaryService>,
    command: SlashCommandPayload,
    correlation_id: String,
) -> JoinHandle<()> {
    let span = info_span!("summary", correlation_id = %correlation_id);
    tokio::spawn(
        async move {
            match service.run(&command).await {
                Ok(_) => info!("Contest summary delivered"),
                Err(e) => error!("Contest summary failed: {}", e),
            }
        }
        .instrument(span),
    )
}
