use std::env;

use url::Url;

use crate::errors::SummaryError;

pub const DEFAULT_IDENTITY_TABLE_URL: &str =
    "https://atcoder-summary-bot.netlify.app/AtCoderIdMatcher.json";
pub const DEFAULT_ATCODER_BASE_URL: &str = "https://atcoder.jp";

/// Where the Slack-to-AtCoder identity table is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityTableLocation {
    Remote(Url),
    LocalFile(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub identity_table: IdentityTableLocation,
    pub atcoder_base_url: Url,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, SummaryError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so tests need not touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SummaryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let identity_table = match lookup("IDENTITY_TABLE_PATH").filter(|p| !p.is_empty()) {
            Some(path) => IdentityTableLocation::LocalFile(path),
            None => {
                let raw = lookup("IDENTITY_TABLE_URL")
                    .unwrap_or_else(|| DEFAULT_IDENTITY_TABLE_URL.to_string());
                let url = Url::parse(&raw).map_err(|e| {
                    SummaryError::ConfigError(format!("IDENTITY_TABLE_URL: {}", e))
                })?;
                IdentityTableLocation::Remote(url)
            }
        };

        let base_raw = lookup("ATCODER_BASE_URL")
            .unwrap_or_else(|| DEFAULT_ATCODER_BASE_URL.to_string());
        let atcoder_base_url = Url::parse(&base_raw)
            .map_err(|e| SummaryError::ConfigError(format!("ATCODER_BASE_URL: {}", e)))?;

        Ok(Self {
            identity_table,
            atcoder_base_url,
        })
    }
}
