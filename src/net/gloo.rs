//! Browser [`Transport`] over `fetch` via `gloo-net`.

use serde::Serialize;

use super::api::{HttpReply, SaveError, Transport};

/// `fetch`-backed transport for the current origin.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<HttpReply, SaveError> {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| SaveError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SaveError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| SaveError::Network(e.to_string()))?;
        Ok(HttpReply { status, body })
    }
}
