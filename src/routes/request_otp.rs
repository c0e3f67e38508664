use axum::{extract::State, Json};
use chrono::Utc;
use redb::ReadableTable;
use serde::{Deserialize, Serialize};

use crate::constants::ERR_PHONE_REQUIRED;
use crate::db::{tables, BINCODE_CONFIG};
use crate::error::{AppError, Result};
use crate::models::OtpRecord;
use crate::routes::validation::required_trimmed;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RequestOtpRequest {
    pub phone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RequestOtpResponse {
    pub success: bool,
    pub message: String,
    /// The issued code is returned in the body because no delivery channel is
    /// integrated. Development behavior only - remove once a real SMS
    /// provider is wired up.
    pub otp: String,
}

/// Issue a one-time login code (login step 1)
///
/// Signup is a prerequisite: no code is ever issued for an unknown phone.
/// The code is upserted keyed by phone, so a new request always invalidates
/// any older unconsumed code and restarts the 5-minute window. Not
/// idempotent by design.
pub async fn request_otp(
    State(state): State<AppState>,
    Json(payload): Json<RequestOtpRequest>,
) -> Result<Json<RequestOtpResponse>> {
    let phone = required_trimmed(payload.phone.as_deref(), ERR_PHONE_REQUIRED)?;

    let store = state.store.clone();

    let record = tokio::task::spawn_blocking(move || -> Result<OtpRecord> {
        let now = Utc::now().timestamp();

        let write_txn = store.begin_write()?;
        let record = {
            let users = write_txn.open_table(tables::USERS)?;
            if users.get(phone.as_str())?.is_none() {
                tracing::info!("OTP requested for unknown phone");
                return Err(AppError::UserNotFound);
            }
            drop(users);

            let mut otps = write_txn.open_table(tables::OTPS)?;
            let record = OtpRecord::issue(now);
            let bytes = bincode::serde::encode_to_vec(&record, BINCODE_CONFIG)?;
            // Replace-or-insert: at most one outstanding code per phone
            otps.insert(phone.as_str(), bytes.as_slice())?;
            record
        };
        write_txn.commit()?;

        tracing::debug!("Issued OTP {} expiring at {}", record.code, record.expires_at);
        Ok(record)
    })
    .await??;

    Ok(Json(RequestOtpResponse {
        success: true,
        message: "OTP sent successfully".to_string(),
        otp: record.code,
    }))
}
