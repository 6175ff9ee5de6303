//! Slack user id to AtCoder id resolution.
//!
//! The table is loaded fresh on every invocation through an [`IdentitySource`],
//! either from a remote JSON document or a local file.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{error, info};
use url::Url;

use crate::core::config::IdentityTableLocation;
use crate::core::models::IdentityEntry;
use crate::errors::SummaryError;

/// Insertion-ordered Slack user id to AtCoder id mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl IdentityMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A repeated Slack id overwrites the AtCoder id in place.
    pub fn insert(&mut self, slack_user_id: String, at_coder_id: String) {
        if let Some(&i) = self.index.get(&slack_user_id) {
            self.entries[i].1 = at_coder_id;
        } else {
            self.index.insert(slack_user_id.clone(), self.entries.len());
            self.entries.push((slack_user_id, at_coder_id));
        }
    }

    #[must_use]
    pub fn get(&self, slack_user_id: &str) -> Option<&str> {
        self.index
            .get(slack_user_id)
            .map(|&i| self.entries[i].1.as_str())
    }

    pub fn at_coder_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, id)| id.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves mentioned Slack users to AtCoder ids.
    ///
    /// With no mentions every known AtCoder id is returned in table order.
    /// Mentions missing from the table are dropped.
    #[must_use]
    pub fn resolve(&self, mentions: &[String]) -> Vec<String> {
        if mentions.is_empty() {
            return self.at_coder_ids().map(ToString::to_string).collect();
        }
        mentions
            .iter()
            .filter_map(|m| self.get(m))
            .map(ToString::to_string)
            .collect()
    }
}

impl FromIterator<IdentityEntry> for IdentityMap {
    fn from_iter<T: IntoIterator<Item = IdentityEntry>>(iter: T) -> Self {
        let mut map = Self::new();
        for entry in iter {
            map.insert(entry.slack_user_id, entry.at_coder_id);
        }
        map
    }
}

/// Read-only provider of the identity table.
#[async_trait]
pub trait IdentitySource: Send + Sync {
    async fn load(&self) -> Result<IdentityMap, SummaryError>;
}

fn parse_table(raw: &str) -> Result<IdentityMap, SummaryError> {
    let entries: Vec<IdentityEntry> = serde_json::from_str(raw)
        .map_err(|e| SummaryError::IdentityError(format!("Invalid identity table: {}", e)))?;
    Ok(entries.into_iter().collect())
}

/// Identity table served as a JSON document over HTTP.
pub struct RemoteIdentitySource {
    http: HttpClient,
    url: Url,
}

impl RemoteIdentitySource {
    #[must_use]
    pub fn new(http: HttpClient, url: Url) -> Self {
        Self { http, url }
    }
}

#[async_trait]
impl IdentitySource for RemoteIdentitySource {
    async fn load(&self) -> Result<IdentityMap, SummaryError> {
        let res = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| SummaryError::IdentityError(e.to_string()))?;

        if let Err(e) = res.error_for_status_ref() {
            error!(url = %self.url, "Identity table request failed: {}", e);
            return Err(SummaryError::IdentityError(e.to_string()));
        }

        let body = res
            .text()
            .await
            .map_err(|e| SummaryError::IdentityError(e.to_string()))?;
        let map = parse_table(&body)?;
        info!(url = %self.url, entries = map.len(), "Loaded identity table");
        Ok(map)
    }
}

/// Identity table read from a JSON file on disk.
pub struct FileIdentitySource {
    path: String,
}

impl FileIdentitySource {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl IdentitySource for FileIdentitySource {
    async fn load(&self) -> Result<IdentityMap, SummaryError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SummaryError::IdentityError(format!("Failed to read {}: {}", self.path, e))
        })?;
        let map = parse_table(&raw)?;
        info!(path = %self.path, entries = map.len(), "Loaded identity table");
        Ok(map)
    }
}

/// Fixed in-memory identity table.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentitySource {
    map: IdentityMap,
}

impl StaticIdentitySource {
    #[must_use]
    pub fn new(map: IdentityMap) -> Self {
        Self { map }
    }
}

#[async_trait]
impl IdentitySource for StaticIdentitySource {
    async fn load(&self) -> Result<IdentityMap, SummaryError> {
        Ok(self.map.clone())
    }
}

/// Picks the identity source matching the configured location.
#[must_use]
pub fn source_for(
    location: &IdentityTableLocation,
    http: HttpClient,
) -> Box<dyn IdentitySource> {
    match location {
        IdentityTableLocation::Remote(url) => {
            Box::new(RemoteIdentitySource::new(http, url.clone()))
        }
        IdentityTableLocation::LocalFile(path) => {
            Box::new(FileIdentitySource::new(path.clone()))
        }
    }
}
