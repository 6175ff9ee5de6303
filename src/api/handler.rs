//! Lambda entrypoint for the `/atcoder` slash command.
//!
//! The request is answered right away with an empty 202, then the summary is
//! built and posted to `response_url` by a detached task.

use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::{helpers, parsing};
use crate::core::config::AppConfig;
use crate::worker::{SummaryService, spawn_summary};

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Fails only when the environment configuration is invalid.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let service = Arc::new(SummaryService::from_config(&config));

    let (response, _detached) = handle_request(service, &event.payload);
    Ok(response)
}

/// Acknowledges the request and, for well-formed POSTs, starts the deferred
/// summary task. The returned handle is `None` when no task was started.
pub fn handle_request(
    service: Arc<SummaryService>,
    payload: &Value,
) -> (Value, Option<JoinHandle<()>>) {
    let correlation_id = Uuid::new_v4().to_string();
    let ack = helpers::accepted_empty();

    let method = parsing::http_method(payload).unwrap_or_default();
    if method != "POST" {
        info!(%correlation_id, %method, "Ignoring non-POST request");
        return (ack, None);
    }

    let Some(body) = parsing::extract_body(payload) else {
        warn!(%correlation_id, "Request missing body");
        return (ack, None);
    };

    let command = match parsing::parse_slash_command(body) {
        Ok(command) => command,
        Err(e) => {
            error!(%correlation_id, "Failed to parse slash command: {}", e);
            return (ack, None);
        }
    };

    info!(
        %correlation_id,
        user_id = %command.user_id,
        text = %command.text,
        "Slash command accepted"
    );
    let handle = spawn_summary(service, command, correlation_id);
    (ack, Some(handle))
}
