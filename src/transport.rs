//! HTTP transport for the inflection service
//!
//! The inflector only needs "give me the body for this word", so the network
//! sits behind the [`Transport`] trait and can be swapped out in tests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::InflectError;

/// Fetches raw response bodies from the inflection service
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch the body for `word` from `resource_path`
    async fn fetch(&self, resource_path: &str, word: &str) -> Result<String, InflectError>;
}

/// Transport backed by a reqwest client with a fixed timeout
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a new HttpTransport for `base_url` with a request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, InflectError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a new HttpTransport with a custom HTTP client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Base address requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, resource_path: &str, word: &str) -> Result<String, InflectError> {
        let url = format!("{}{}", self.base_url, resource_path);
        debug!(%url, %word, "Fetching inflections");

        let response = self
            .client
            .get(&url)
            .query(&[("name", word)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The body still goes to the parser, which classifies error pages.
            warn!(%status, %word, "Inflection service returned a non-success status");
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_base_url() {
        let transport = HttpTransport::new("http://localhost:1/", Duration::from_secs(1))
            .expect("Client should build");
        assert_eq!(transport.base_url(), "http://localhost:1/");
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Should bind");
            listener.local_addr().expect("Should have address").port()
        };
        let transport =
            HttpTransport::new(format!("http://127.0.0.1:{port}/"), Duration::from_secs(1))
                .expect("Client should build");
        let result = transport.fetch("inflect.xml", "книга").await;
        assert!(matches!(result, Err(InflectError::Transport(_))));
    }
}
