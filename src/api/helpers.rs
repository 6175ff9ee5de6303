//! Lambda proxy response builders.

use serde_json::{Value, json};

/// Returns the immediate 202 acknowledgement with an empty body.
///
/// Slack drops slash commands that are not answered within three seconds,
/// so this goes out before any scraping starts.
#[must_use]
pub fn accepted_empty() -> Value {
    json!({ "statusCode": 202, "body": "" })
}
