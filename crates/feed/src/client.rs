//! Authenticated fetch of the raw utilization dataset.
//!
//! Wraps the feed's single endpoint using [`reqwest`]: one bearer-token
//! GET, JSON body decode. No retry, no pagination, no streaming.

/// HTTP client for the utilization feed endpoint.
pub struct FeedClient {
    client: reqwest::Client,
    url: String,
    token: String,
}

/// Errors from the feed client.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The HTTP request itself failed (network, DNS, TLS, or body decode).
    #[error("Feed request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The feed returned a non-2xx status code.
    #[error("Feed error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl FeedClient {
    /// Create a new client for the feed endpoint.
    ///
    /// * `url`   - full endpoint URL.
    /// * `token` - static bearer credential, passed through unchanged.
    pub fn new(url: String, token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
            token,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    pub fn with_client(client: reqwest::Client, url: String, token: String) -> Self {
        Self { client, url, token }
    }

    /// Endpoint URL this client fetches from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the raw dataset.
    ///
    /// Issues one `GET` with an `Authorization: Bearer` header and decodes
    /// the body as JSON. The result is deliberately untyped -- whether it is
    /// actually a sequence of uniform records is the validator's call.
    pub async fn fetch(&self) -> Result<serde_json::Value, FeedError> {
        let response = self
            .client
            .get(&self.url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(FeedError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(url = %self.url, "Fetched utilization feed");
        Ok(response.json().await?)
    }
}
