use serde::{Deserialize, Serialize};

/// User record stored in redb, keyed by trimmed phone number
/// Uses a Unix timestamp for compact storage with bincode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    /// Store-generated identifier (UUID v4), minted at signup
    pub id: String,
    pub name: String,
    pub email: String,
    /// When the user was created (Unix timestamp)
    pub created_at: i64,
}

impl UserRecord {
    /// Create a record for a freshly signed-up user
    pub fn new(name: &str, email: &str, now: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            created_at: now,
        }
    }
}

/// Session payload returned by a successful OTP verification
///
/// The caller holds this as the authenticated session; no server-side token
/// is issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl User {
    /// Join a stored record with the phone number it is keyed under
    pub fn from_record(record: UserRecord, phone: &str) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            phone: phone.to_string(),
        }
    }
}
