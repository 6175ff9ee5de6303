use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Failed to parse slash command: {0}")]
    ParseError(String),

    #[error("Failed to load identity table: {0}")]
    IdentityError(String),

    #[error("Failed to extract submissions: {0}")]
    ScrapeError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for SummaryError {
    fn from(error: reqwest::Error) -> Self {
        SummaryError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(error: serde_json::Error) -> Self {
        SummaryError::ParseError(error.to_string())
    }
}
