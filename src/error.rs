use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Deserialization error: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("User already exists")]
    Conflict,

    #[error("User not found")]
    UserNotFound,

    #[error("OTP expired")]
    OtpExpired,

    #[error("Invalid OTP")]
    OtpInvalid,

    #[error("URL is required")]
    UrlRequired,

    #[error("Upstream shortener rejected the request: {0}")]
    Upstream(String),

    #[error("Shortener request failed: {0}")]
    ShortenerTransport(#[from] reqwest::Error),
}

/// 500 body for the auth endpoints
fn internal() -> (StatusCode, Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "success": false, "error": "Internal server error" }),
    )
}

/// 400 body for the auth endpoints; these carry an explicit success flag
fn auth_failure(message: &str) -> (StatusCode, Value) {
    (
        StatusCode::BAD_REQUEST,
        json!({ "success": false, "error": message }),
    )
}

/// Implement IntoResponse to convert AppError into HTTP responses
///
/// The auth endpoints answer `{success: false, error}`, the shorten endpoint
/// answers a bare `{error}`; both shapes are produced here so no handler
/// builds error bodies by hand.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Transaction(ref e) => {
                tracing::error!("Transaction error: {:?}", e);
                internal()
            }
            AppError::Table(ref e) => {
                tracing::error!("Table error: {:?}", e);
                internal()
            }
            AppError::Storage(ref e) => {
                tracing::error!("Storage error: {:?}", e);
                internal()
            }
            AppError::Commit(ref e) => {
                tracing::error!("Commit error: {:?}", e);
                internal()
            }
            AppError::Encode(ref e) => {
                tracing::error!("Serialization error: {:?}", e);
                internal()
            }
            AppError::Decode(ref e) => {
                tracing::error!("Deserialization error: {:?}", e);
                internal()
            }
            AppError::TaskJoin(ref e) => {
                tracing::error!("Task join error: {:?}", e);
                internal()
            }
            AppError::Validation(ref msg) => auth_failure(msg),
            AppError::Conflict => auth_failure("User already exists"),
            AppError::UserNotFound => auth_failure("User not found. Please sign up first."),
            AppError::OtpExpired => auth_failure("OTP expired. Please request a new one."),
            AppError::OtpInvalid => auth_failure("Invalid OTP"),
            AppError::UrlRequired => (StatusCode::BAD_REQUEST, json!({ "error": "URL is required" })),
            AppError::Upstream(ref msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::ShortenerTransport(ref e) => {
                tracing::error!("Shortener request failed: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to shorten URL" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;
