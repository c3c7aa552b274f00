//! UserDirectory trait and REST integration.
//!
//! Provides an abstraction layer over the remote directory so that the
//! session logic is decoupled from the HTTP client and testable against
//! a mock implementation.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::models::{User, UserId};

/// Errors from the directory.
///
/// The transport and the JSON decode are the only failure points; the
/// upstream mock service answers every well-formed request, so HTTP
/// status codes are not inspected separately.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Trait for the remote user directory.
///
/// Implementations make a single best-effort attempt per call — no retry,
/// no timeout, no cancellation.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch the full collection.
    async fn fetch_all(&self) -> Result<Vec<User>, ApiError>;

    /// Delete one record. The mock service echoes an empty object.
    async fn delete(&self, id: UserId) -> Result<Value, ApiError>;

    /// Replace one record and return the parsed response.
    async fn update(&self, id: UserId, user: &User) -> Result<User, ApiError>;
}

/// reqwest-backed directory against a resource base URL.
pub struct RestDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl RestDirectory {
    /// Create a directory client for `base_url`, e.g.
    /// `https://jsonplaceholder.typicode.com/users`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn item_url(&self, id: UserId) -> String {
        format!("{}/{id}", self.base_url)
    }
}

#[async_trait]
impl UserDirectory for RestDirectory {
    async fn fetch_all(&self) -> Result<Vec<User>, ApiError> {
        let url = &self.base_url;
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{url}: {e}")))?;
        resp.json()
            .await
            .map_err(|e| ApiError::Decode(format!("{url}: {e}")))
    }

    async fn delete(&self, id: UserId) -> Result<Value, ApiError> {
        let url = self.item_url(id);
        let resp = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{url}: {e}")))?;
        resp.json()
            .await
            .map_err(|e| ApiError::Decode(format!("{url}: {e}")))
    }

    async fn update(&self, id: UserId, user: &User) -> Result<User, ApiError> {
        let url = self.item_url(id);
        let resp = self
            .client
            .put(&url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/json; charset=UTF-8",
            )
            .json(user)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{url}: {e}")))?;
        resp.json()
            .await
            .map_err(|e| ApiError::Decode(format!("{url}: {e}")))
    }
}
