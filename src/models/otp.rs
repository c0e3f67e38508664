use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{OTP_CODE_MIN, OTP_CODE_SPAN, OTP_TTL_SECS};

/// One-time code stored in redb, keyed by phone number
///
/// At most one record exists per phone; issuing a new code replaces any
/// prior record and restarts the expiry window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpRecord {
    /// 6 ASCII digits, uniform over [100000, 999999]
    pub code: String,
    /// Unix timestamp after which the code is no longer accepted
    pub expires_at: i64,
}

impl OtpRecord {
    /// Issue a fresh code valid for the configured window starting at `now`
    pub fn issue(now: i64) -> Self {
        Self {
            code: generate_code(),
            expires_at: now + OTP_TTL_SECS,
        }
    }

    /// A record is live iff `now <= expires_at`
    pub fn is_expired(&self, now: i64) -> bool {
        now > self.expires_at
    }

    /// Compare against a submitted code, ignoring surrounding whitespace
    pub fn matches(&self, submitted: &str) -> bool {
        self.code == submitted.trim()
    }
}

/// Generate a 6-digit code; the offset keeps the leading digit in 1-9
fn generate_code() -> String {
    rand::thread_rng()
        .gen_range(OTP_CODE_MIN..OTP_CODE_MIN + OTP_CODE_SPAN)
        .to_string()
}
