use serde_json::Value;

use crate::errors::SummaryError;
use crate::slack::command_parser::{SlashCommandPayload, parse_form_data};

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method of an API Gateway event, REST (`httpMethod`) or HTTP API
/// (`requestContext.http.method`) shaped.
pub fn http_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["httpMethod"])
        .or_else(|| v_str(payload, &["requestContext", "http", "method"]))
}

pub fn extract_body(payload: &Value) -> Option<&str> {
    v_str(payload, &["body"])
}

pub fn parse_slash_command(body: &str) -> Result<SlashCommandPayload, SummaryError> {
    let command = parse_form_data(body)
        .map_err(|e| SummaryError::ParseError(format!("Failed to parse form data: {}", e)))?;
    if command.response_url.is_empty() {
        return Err(SummaryError::ParseError("Missing response_url".to_string()));
    }
    Ok(command)
}
