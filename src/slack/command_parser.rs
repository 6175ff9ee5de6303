use std::collections::HashMap;

use percent_encoding::percent_decode_str;

/// Fields Slack sends for a slash command invocation that this bot reads.
#[derive(Debug, Clone, Default)]
pub struct SlashCommandPayload {
    pub team_id: String,
    pub channel_id: String,
    pub user_id: String,
    pub command: String,
    pub text: String,
    pub response_url: String,
}

/// Decodes a URL-encoded form component, treating `+` as a space.
///
/// # Examples
///
/// ```
/// use atcoder_summary::slack::command_parser::decode_url_component;
///
/// assert_eq!(decode_url_component("abc123+%3C%40U1%7Calice%3E").unwrap(), "abc123 <@U1|alice>");
/// ```
pub fn decode_url_component(input: &str) -> Result<String, String> {
    let spaced = input.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.to_string())
        .map_err(|e| format!("Failed to decode URL component: {}", e))
}

/// Parses the URL-encoded body of a slash command request.
///
/// Missing fields default to the empty string.
///
/// # Examples
///
/// ```
/// use atcoder_summary::slack::command_parser::parse_form_data;
///
/// let form_data = "team_id=T1&command=%2Fatcoder&text=123&\
///                  response_url=https%3A%2F%2Fhooks.slack.com%2Fcommands%2F1";
///
/// let payload = parse_form_data(form_data).unwrap();
/// assert_eq!(payload.command, "/atcoder");
/// assert_eq!(payload.response_url, "https://hooks.slack.com/commands/1");
/// ```
pub fn parse_form_data(form_data: &str) -> Result<SlashCommandPayload, String> {
    let mut map: HashMap<String, String> = HashMap::new();

    for pair in form_data.split('&') {
        if let Some(idx) = pair.find('=') {
            let key = decode_url_component(&pair[..idx])
                .map_err(|e| format!("Failed to decode key: {}", e))?;
            let value = decode_url_component(&pair[idx + 1..])
                .map_err(|e| format!("Failed to decode value: {}", e))?;
            map.insert(key, value);
        }
    }

    let mut field = |name: &str| map.remove(name).unwrap_or_default();

    Ok(SlashCommandPayload {
        team_id: field("team_id"),
        channel_id: field("channel_id"),
        user_id: field("user_id"),
        command: field("command"),
        text: field("text"),
        response_url: field("response_url"),
    })
}
