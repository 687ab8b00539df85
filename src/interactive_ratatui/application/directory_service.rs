use crate::interactive_ratatui::domain::models::{UserQuery, UserRecord};
use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Source of user records. Ordering and filtering happen on the other side.
pub trait UserDirectory: Send + Sync {
    fn fetch_users(&self, query: &UserQuery) -> Result<Vec<UserRecord>>;
}

/// HTTP client for `GET <base>/users?sortBy=..&order=..&search=..`.
pub struct DirectoryService {
    client: Client,
    base_url: Url,
}

impl DirectoryService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid base URL: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            bail!("Base URL cannot carry a path: {base_url}");
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn request_url(&self, query: &UserQuery) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("users");
        }
        url.query_pairs_mut().clear().extend_pairs(query.params());
        url
    }
}

impl UserDirectory for DirectoryService {
    fn fetch_users(&self, query: &UserQuery) -> Result<Vec<UserRecord>> {
        let url = self.request_url(query);
        debug!(%url, "Requesting users");

        let response = self
            .client
            .get(url.clone())
            .send()
            .with_context(|| format!("Request to {url} failed"))?
            .error_for_status()
            .context("Directory endpoint returned an error status")?;

        let users: Vec<UserRecord> = response
            .json()
            .context("Failed to parse user list")?;

        debug!(count = users.len(), "Received users");
        Ok(users)
    }
}
