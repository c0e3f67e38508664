use axum::{extract::State, Json};
use chrono::Utc;
use redb::ReadableTable;
use serde::{Deserialize, Serialize};

use crate::constants::ERR_ALL_FIELDS_REQUIRED;
use crate::db::{tables, BINCODE_CONFIG};
use crate::error::{AppError, Result};
use crate::models::UserRecord;
use crate::routes::validation::required_trimmed;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
}

/// Register a new account
///
/// Phone and email are each unique across all users; one transaction covers
/// the lookup on both fields and the insert, so neither identity can be
/// claimed twice. Signup alone does not authenticate - the caller still has
/// to run the OTP login flow.
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<SignupResponse>> {
    let name = required_trimmed(payload.name.as_deref(), ERR_ALL_FIELDS_REQUIRED)?;
    let email = required_trimmed(payload.email.as_deref(), ERR_ALL_FIELDS_REQUIRED)?;
    let phone = required_trimmed(payload.phone.as_deref(), ERR_ALL_FIELDS_REQUIRED)?;

    let store = state.store.clone();

    tokio::task::spawn_blocking(move || -> Result<()> {
        let now = Utc::now().timestamp();

        let write_txn = store.begin_write()?;
        {
            let mut users = write_txn.open_table(tables::USERS)?;
            let mut emails = write_txn.open_table(tables::USER_EMAILS)?;

            // One check across both identity fields
            if users.get(phone.as_str())?.is_some() || emails.get(email.as_str())?.is_some() {
                tracing::info!("Signup rejected: user already exists");
                return Err(AppError::Conflict);
            }

            let record = UserRecord::new(&name, &email, now);
            let bytes = bincode::serde::encode_to_vec(&record, BINCODE_CONFIG)?;
            users.insert(phone.as_str(), bytes.as_slice())?;
            emails.insert(email.as_str(), phone.as_str())?;
        }
        write_txn.commit()?;

        tracing::info!("New user registered");
        Ok(())
    })
    .await??;

    Ok(Json(SignupResponse {
        success: true,
        message: "Account created successfully".to_string(),
    }))
}
