use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub shortened: String,
}

/// Shorten a URL via the upstream public API
///
/// The service holds no link state of its own: the upstream owns the
/// short-to-long mapping and clients keep their own recent-links history
/// on-device.
pub async fn shorten(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>> {
    let url = payload
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or(AppError::UrlRequired)?;

    tracing::info!("Shortening URL: {}", url);

    let shortened = state.shortener.shorten(url).await?;

    Ok(Json(ShortenResponse { shortened }))
}
