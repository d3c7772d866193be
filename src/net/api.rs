//! Save-list request payload and HTTP transport seam.
//!
//! ERROR HANDLING
//! ==============
//! A non-2xx reply collapses to [`SaveError::Rejected`] with no status or body
//! detail; the server's validation output is not surfaced. Transport failures
//! (connectivity, CORS) pass through as [`SaveError::Network`]. Nothing is
//! retried: one call, at most one request.

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use crate::state::favorites::Favorites;

/// Body of `POST /api/save`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SaveRequest {
    pub name: String,
    pub email: String,
    pub note: String,
    pub city: String,
    pub favorites: Favorites,
}

/// Status and raw body of an HTTP reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure of a save submission.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Failed to save")]
    Rejected,
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("response is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Sends JSON bodies over HTTP.
pub trait Transport {
    /// POST `body` as JSON to `url` with a JSON content type.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError::Encode`] if `body` cannot be serialized and
    /// [`SaveError::Network`] if no reply was received. HTTP error statuses are
    /// not errors at this layer.
    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<HttpReply, SaveError>;
}

/// Interpret a save reply: non-2xx is a rejection, otherwise parse the body.
///
/// # Errors
///
/// Returns [`SaveError::Rejected`] for non-2xx and [`SaveError::Decode`] when
/// the body is not JSON.
pub fn parse_save_reply(reply: &HttpReply) -> Result<serde_json::Value, SaveError> {
    if !reply.is_success() {
        return Err(SaveError::Rejected);
    }
    serde_json::from_str(&reply.body).map_err(SaveError::Decode)
}
