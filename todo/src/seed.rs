//! Seed loading: the one-shot fetch that fills the list at startup.
//!
//! [`HttpSeedSource`] reads a JSON array of objects with a `title` field and
//! keeps the first titles in response order. [`load_seed`] is the body of the
//! effect returned for `TodoAction::LoadSeed`.

use crate::types::TodoAction;
use futures::future::BoxFuture;
use plan_today_core::environment::{SeedError, SeedSource};
use reqwest::Client;
use serde::Deserialize;
use std::sync::Arc;

/// Public placeholder API the list is seeded from
pub const DEFAULT_SEED_URL: &str = "https://jsonplaceholder.typicode.com/todos";

/// One entry of the remote collection; every other field is ignored
#[derive(Debug, Deserialize)]
struct RemoteTodo {
    title: String,
}

/// Seed source backed by an HTTP GET
#[derive(Clone, Debug)]
pub struct HttpSeedSource {
    client: Client,
    url: String,
}

impl HttpSeedSource {
    /// Create a source reading from `url`
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    /// Create a source with an explicit HTTP client
    #[must_use]
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// The endpoint this source reads from
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch(&self, limit: usize) -> Result<Vec<String>, SeedError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| SeedError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SeedError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SeedError::RequestFailed(e.to_string()))?;

        parse_titles(&bytes, limit)
    }
}

impl SeedSource for HttpSeedSource {
    fn fetch_titles(&self, limit: usize) -> BoxFuture<'_, Result<Vec<String>, SeedError>> {
        Box::pin(self.fetch(limit))
    }
}

/// Decode a seed response body and keep the first `limit` titles.
///
/// # Errors
///
/// Returns [`SeedError::MalformedResponse`] if the body is not a JSON array
/// of objects carrying a string `title`.
pub fn parse_titles(body: &[u8], limit: usize) -> Result<Vec<String>, SeedError> {
    let todos: Vec<RemoteTodo> =
        serde_json::from_slice(body).map_err(|e| SeedError::MalformedResponse(e.to_string()))?;

    Ok(todos.into_iter().take(limit).map(|todo| todo.title).collect())
}

/// Fetch the seed titles and turn them into the single `SetAll` intent.
///
/// Failures are logged and counted, and produce no action: the list stays
/// as it was and remains editable.
pub async fn load_seed(source: Arc<dyn SeedSource>, limit: usize) -> Option<TodoAction> {
    match source.fetch_titles(limit).await {
        Ok(items) => {
            tracing::info!(count = items.len(), "Seed items loaded");
            metrics::counter!("seed.fetch.succeeded").increment(1);
            Some(TodoAction::SetAll { items })
        },
        Err(error) => {
            tracing::error!(%error, "Failed to load seed items");
            metrics::counter!("seed.fetch.failed").increment(1);
            None
        },
    }
}
