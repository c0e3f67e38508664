use serde::Deserialize;
use thiserror::Error;

use crate::error::AppError;

/// Error type for upstream shortening calls (constrained to only possible errors)
#[derive(Debug, Error)]
pub enum ShortenerError {
    /// The API answered but rejected the URL
    #[error("{0}")]
    Api(String),
    /// Transport or decode failure talking to the API
    #[error("shortener request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl From<ShortenerError> for AppError {
    fn from(err: ShortenerError) -> Self {
        match err {
            ShortenerError::Api(msg) => AppError::Upstream(msg),
            ShortenerError::Http(e) => AppError::ShortenerTransport(e),
        }
    }
}

/// Response envelope of the CleanURI-style shortening API
///
/// Exactly one of the fields is populated; a rejection arrives as a 4xx with
/// an `error` body, which still parses here.
#[derive(Debug, Deserialize)]
struct ShortenApiResponse {
    result_url: Option<String>,
    error: Option<String>,
}

/// Client for the third-party public shortening API
#[derive(Debug, Clone)]
pub struct ShortenerClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ShortenerClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Shorten a URL, returning its short form
    ///
    /// The API takes a form-encoded `url` field and answers with either
    /// `result_url` or `error`.
    pub async fn shorten(&self, url: &str) -> Result<String, ShortenerError> {
        let response = self
            .http
            .post(&self.endpoint)
            .form(&[("url", url.trim())])
            .send()
            .await?;

        let body: ShortenApiResponse = response.json().await?;

        match body.result_url {
            // The public API escapes slashes in its JSON payload
            Some(short) => Ok(short.replace('\\', "")),
            None => {
                let message = body
                    .error
                    .unwrap_or_else(|| "Failed to shorten URL".to_string());
                tracing::warn!("Upstream shortener rejected request: {}", message);
                Err(ShortenerError::Api(message))
            }
        }
    }
}
