//! Remote space-imagery search.
//!
//! A single GET against a fixed proxy endpoint that relays the Unsplash
//! random-photo API. The response is a JSON array of photos; each result's
//! `urls.regular` link is sized down with `&w=1920&q=80`. Every failure mode
//! (network, HTTP status, unexpected shape) is logged and collapses to "no
//! results" -- the caller keeps whatever candidate list it already had, and
//! retries are user-triggered only.

use crate::error::FetchError;

/// Proxied Unsplash random-photo query: 4 landscape space images per fetch.
pub const SEARCH_ENDPOINT: &str = "https://hooks.jdoodle.net/proxy?url=https://api.unsplash.com/photos/random?count=4&query=galaxy,stars,cosmic,nebula&orientation=landscape";

pub struct ImageSearch {
    client: reqwest::Client,
    endpoint: String,
}

impl Default for ImageSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageSearch {
    pub fn new() -> Self {
        Self::with_endpoint(SEARCH_ENDPOINT)
    }

    /// Point the search at a different endpoint (tests use a mock server).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetch a fresh batch of image candidates. Never fails: any error is
    /// logged and an empty list returned.
    pub async fn fetch(&self) -> Vec<String> {
        match self.try_fetch().await {
            Ok(urls) => urls,
            Err(e) => {
                tracing::warn!(error = %e, "image search failed; keeping existing candidates");
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self) -> Result<Vec<String>, FetchError> {
        let response = self.client.get(&self.endpoint).send().await?;
        let body: serde_json::Value = response.json().await?;
        let items = body
            .as_array()
            .ok_or_else(|| FetchError::UnexpectedShape("expected a JSON array".to_string()))?;

        let urls = items
            .iter()
            .filter_map(|item| {
                item.get("urls")
                    .and_then(|urls| urls.get("regular"))
                    .and_then(|url| url.as_str())
                    .map(|url| format!("{url}&w=1920&q=80"))
            })
            .collect();
        Ok(urls)
    }
}
