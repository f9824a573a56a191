//! Upstream dictionary API client.
//!
//! One outbound GET per lookup against `<base>/api/v2/entries/en/<word>`.
//! Failures are categorized so the HTTP layer can map an upstream 404 to
//! its own not-found response and everything else to a 500.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Production dictionary API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev";

/// Outbound request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Client for the external dictionary lookup API.
pub struct DictionaryClient {
    http: reqwest::Client,
    base_url: String,
}

/// Lookup failures.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The upstream reported the word as unknown (HTTP 404).
    #[error("word not found")]
    WordNotFound,

    /// The upstream answered with another non-success status.
    #[error("upstream returned HTTP {0}")]
    Status(StatusCode),

    /// The request never completed (DNS, connect, timeout, body read).
    #[error("network error: {0}")]
    Network(String),
}

impl DictionaryClient {
    /// Create a client against the given API base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Look up a word, returning the raw upstream JSON payload.
    ///
    /// The payload is kept as loose JSON on purpose: the upstream shape is
    /// untrusted and normalization happens later. An empty body becomes
    /// `Value::Null`; a non-JSON body is carried as a string.
    pub async fn lookup(&self, word: &str) -> Result<Value, DictionaryError> {
        let url = format!(
            "{}/api/v2/entries/en/{}",
            self.base_url,
            urlencoding::encode(word)
        );
        debug!("Fetching definition from {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DictionaryError::Network(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(DictionaryError::WordNotFound);
        }
        if !status.is_success() {
            return Err(DictionaryError::Status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DictionaryError::Network(e.to_string()))?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = DictionaryClient::new("http://127.0.0.1:9/").unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:9");
    }

    #[test]
    fn test_word_is_path_encoded() {
        let encoded = urlencoding::encode("ice cream");
        assert_eq!(encoded, "ice%20cream");
    }
}
