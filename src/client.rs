use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::DEFAULT_SHORTENER_API_URL;
use crate::models::User;
use crate::shortener::ShortenerClient;

/// Client-side error for backend and upstream calls
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Neither the backend nor the public API could shorten the URL
    #[error("Service unavailable")]
    ServiceUnavailable,
}

/// Response envelope shared by the auth endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

#[derive(Debug, Deserialize)]
struct ShortenEnvelope {
    shortened: Option<String>,
    error: Option<String>,
}

/// API client for the Shortly backend
///
/// Holds the authenticated user in memory after a successful verification;
/// there is no server-side session to refresh or revoke.
pub struct ShortlyClient {
    http: reqwest::Client,
    base_url: String,
    fallback: ShortenerClient,
    user: Option<User>,
}

impl ShortlyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            fallback: ShortenerClient::new(DEFAULT_SHORTENER_API_URL),
            user: None,
        }
    }

    /// Override the public API used when the backend cannot shorten
    pub fn with_fallback_shortener(mut self, endpoint: impl Into<String>) -> Self {
        self.fallback = ShortenerClient::new(endpoint);
        self
    }

    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Result<AuthResponse, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/signup", self.base_url))
            .json(&serde_json::json!({ "name": name, "email": email, "phone": phone }))
            .send()
            .await?;

        Ok(response.json().await?)
    }

    pub async fn request_otp(&self, phone: &str) -> Result<AuthResponse, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/request-otp", self.base_url))
            .json(&serde_json::json!({ "phone": phone }))
            .send()
            .await?;

        Ok(response.json().await?)
    }

    /// Verify a code; on success the returned user becomes the session
    pub async fn verify_otp(&mut self, phone: &str, otp: &str) -> Result<AuthResponse, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/verify-otp", self.base_url))
            .json(&serde_json::json!({ "phone": phone, "otp": otp }))
            .send()
            .await?;

        let result: AuthResponse = response.json().await?;

        if result.success {
            if let Some(user) = &result.user {
                self.user = Some(user.clone());
            }
        }

        Ok(result)
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    /// Shorten a URL, preferring the backend
    ///
    /// Falls back to the public API directly when the backend is unreachable
    /// or rejects the request; mobile builds routinely run without a backend.
    pub async fn shorten(&self, long_url: &str) -> Result<String, ClientError> {
        let url = long_url.trim();

        match self.shorten_via_backend(url).await {
            Ok(short) => return Ok(short),
            Err(e) => {
                tracing::warn!("Backend shorten failed, trying public API: {}", e);
            }
        }

        self.fallback.shorten(url).await.map_err(|e| {
            tracing::warn!("Public API shorten failed: {}", e);
            ClientError::ServiceUnavailable
        })
    }

    async fn shorten_via_backend(&self, url: &str) -> Result<String, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/shorten", self.base_url))
            .json(&serde_json::json!({ "url": url }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::ServiceUnavailable);
        }

        let body: ShortenEnvelope = response.json().await?;
        match body.shortened {
            Some(short) if body.error.is_none() => Ok(short),
            _ => Err(ClientError::ServiceUnavailable),
        }
    }
}
