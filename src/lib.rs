//! Shortly - URL shortening backend with OTP login, plus the client-side
//! pieces: a backend API client and the on-device link history.
//!
//! This module exports the core types and functions for testing and reuse.

pub mod client;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod history;
pub mod models;
pub mod routes;
pub mod shortener;

pub use config::Config;
pub use db::{open_store, Store};
pub use error::{AppError, Result};
pub use shortener::ShortenerClient;

use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::{health_check, request_otp, shorten, signup, verify_otp};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub config: Config,
    pub shortener: ShortenerClient,
}

impl AppState {
    /// Create a new AppState with the given store and configuration
    pub fn new(store: Store, config: Config) -> Self {
        let shortener = ShortenerClient::new(config.shortener_api_url.clone());
        Self {
            store,
            config,
            shortener,
        }
    }
}

/// Build the application router
///
/// Browser clients call from arbitrary origins, so CORS answers pre-flights
/// permissively for POST. A wrong method on a known route yields 405.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/signup", post(signup))
        .route("/api/request-otp", post(request_otp))
        .route("/api/verify-otp", post(verify_otp))
        .route("/api/shorten", post(shorten))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
