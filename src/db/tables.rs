use redb::TableDefinition;

/// Users table: trimmed phone number -> UserRecord (serialized)
pub const USERS: TableDefinition<&str, &[u8]> = TableDefinition::new("users");

/// Email uniqueness index: email -> owning phone
/// Maintained in the same write transaction as USERS so neither identity
/// field can be claimed twice
pub const USER_EMAILS: TableDefinition<&str, &str> = TableDefinition::new("user_emails");

/// One-time codes: phone -> OtpRecord (serialized)
/// Insert replaces, so at most one outstanding code exists per phone
pub const OTPS: TableDefinition<&str, &[u8]> = TableDefinition::new("otps");
