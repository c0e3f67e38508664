use axum::{extract::State, Json};
use chrono::Utc;
use redb::ReadableTable;
use serde::{Deserialize, Serialize};

use crate::constants::ERR_PHONE_AND_OTP_REQUIRED;
use crate::db::{tables, BINCODE_CONFIG};
use crate::error::{AppError, Result};
use crate::models::{OtpRecord, User, UserRecord};
use crate::routes::validation::required_trimmed;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct VerifyOtpRequest {
    pub phone: Option<String>,
    pub otp: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub message: String,
    pub user: User,
}

/// Verify a one-time login code (login step 2)
///
/// Per-phone state machine: no record or past expiry fails as expired and
/// purges the record; a mismatch fails as invalid and keeps the live record
/// usable for a later attempt; a match consumes the record exactly once and
/// returns the session payload.
pub async fn verify_otp(
    State(state): State<AppState>,
    Json(payload): Json<VerifyOtpRequest>,
) -> Result<Json<VerifyOtpResponse>> {
    let phone = required_trimmed(payload.phone.as_deref(), ERR_PHONE_AND_OTP_REQUIRED)?;
    let otp = required_trimmed(payload.otp.as_deref(), ERR_PHONE_AND_OTP_REQUIRED)?;

    let store = state.store.clone();

    let user = tokio::task::spawn_blocking(move || -> Result<User> {
        let now = Utc::now().timestamp();

        let write_txn = store.begin_write()?;
        let mut otps = write_txn.open_table(tables::OTPS)?;

        let stored: Option<OtpRecord> = match otps.get(phone.as_str())? {
            Some(bytes) => {
                let (record, _) = bincode::serde::decode_from_slice(bytes.value(), BINCODE_CONFIG)?;
                Some(record)
            }
            None => None,
        };

        let record = match stored {
            Some(record) if !record.is_expired(now) => record,
            _ => {
                // Purge stale records so later attempts keep reporting
                // expired instead of a misleading "Invalid OTP"
                otps.remove(phone.as_str())?;
                drop(otps);
                write_txn.commit()?;
                return Err(AppError::OtpExpired);
            }
        };

        if !record.matches(&otp) {
            // The live code stays stored - a later correct attempt may still
            // succeed until it expires
            return Err(AppError::OtpInvalid);
        }

        // Consumed exactly once
        otps.remove(phone.as_str())?;
        drop(otps);

        let users = write_txn.open_table(tables::USERS)?;
        let stored_user: Option<UserRecord> = match users.get(phone.as_str())? {
            Some(bytes) => {
                let (record, _) = bincode::serde::decode_from_slice(bytes.value(), BINCODE_CONFIG)?;
                Some(record)
            }
            None => None,
        };
        drop(users);

        let Some(user_record) = stored_user else {
            // A live code without an owner should be unreachable given the
            // issue-time check; fail closed rather than emit a session with
            // no user
            write_txn.commit()?;
            tracing::warn!("Verified OTP for a phone with no user record");
            return Err(AppError::UserNotFound);
        };

        write_txn.commit()?;

        tracing::info!("OTP verified, session issued");
        Ok(User::from_record(user_record, &phone))
    })
    .await??;

    Ok(Json(VerifyOtpResponse {
        success: true,
        message: "Login successful".to_string(),
        user,
    }))
}
