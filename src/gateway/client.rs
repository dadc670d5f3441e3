//! HTTP client for the store service
//!
//! Low-level calls against `/todo/list`, `/todo/add` and `/health`.
//! Every failure comes back as an explicit `TodoError` variant; turning
//! those into benign tool results is the caller's job.

use crate::errors::{Result, TodoError};
use crate::store::types::{Envelope, NewTodo, TodoItem};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Default store service URL
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001/";

/// Operations the tools need from a todo backend
#[async_trait]
pub trait TodoApi: Send + Sync {
    /// Fetch up to `length` items, most recent first
    async fn list(&self, length: i64) -> Result<Vec<TodoItem>>;

    /// Create an item and return it as stored
    async fn add(&self, name: &str, priority: &str) -> Result<TodoItem>;
}

/// reqwest-backed client for the store service
#[derive(Debug, Clone)]
pub struct StoreClient {
    client: Client,
    base_url: String,
}

impl StoreClient {
    /// Client against the default URL with no explicit timeout
    pub fn new() -> Result<Self> {
        Self::with_config(DEFAULT_BASE_URL, None)
    }

    /// Client with a custom base URL and optional request timeout
    pub fn with_config(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Check whether the store answers its health route
    pub async fn health(&self) -> Result<bool> {
        let url = self.endpoint("health");
        match self.client.get(&url).send().await {
            Ok(response) => Ok(response.status().is_success()),
            Err(e) if e.is_connect() || e.is_timeout() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Check status, log the body, unwrap the envelope
    async fn unwrap_envelope<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = response.error_for_status()?;
        let body = response.text().await?;
        debug!(%body, "store response");

        let envelope: Envelope<T> =
            serde_json::from_str(&body).map_err(|e| TodoError::Decode(e.to_string()))?;

        if !envelope.is_success() {
            return Err(TodoError::Upstream {
                code: envelope.code,
                msg: envelope.msg,
            });
        }

        Ok(envelope.data)
    }
}

#[async_trait]
impl TodoApi for StoreClient {
    async fn list(&self, length: i64) -> Result<Vec<TodoItem>> {
        let url = self.endpoint("todo/list");
        let response = self
            .client
            .get(&url)
            .query(&[("length", length)])
            .send()
            .await?;

        Self::unwrap_envelope(response).await
    }

    async fn add(&self, name: &str, priority: &str) -> Result<TodoItem> {
        let url = self.endpoint("todo/add");
        let body = NewTodo {
            name: name.to_string(),
            priority: priority.to_string(),
        };
        let response = self.client.post(&url).json(&body).send().await?;

        Self::unwrap_envelope(response).await
    }
}
