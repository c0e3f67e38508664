/// Smallest issuable one-time code (inclusive)
pub const OTP_CODE_MIN: u32 = 100_000;

/// Size of the one-time code space; codes are drawn uniformly from
/// [OTP_CODE_MIN, OTP_CODE_MIN + OTP_CODE_SPAN), so the leading digit is 1-9
pub const OTP_CODE_SPAN: u32 = 900_000;

/// One-time code lifetime in seconds (5 minutes)
pub const OTP_TTL_SECS: i64 = 300;

/// Maximum number of recent links kept in the on-device history
pub const MAX_STORED_LINKS: usize = 3;

/// Stored link lifetime in milliseconds (1 hour)
pub const LINK_TTL_MS: i64 = 3_600_000;

/// Storage key holding the serialized link history
pub const LINK_STORAGE_KEY: &str = "shortened_urls";

/// Public shortening API used when no endpoint is configured
pub const DEFAULT_SHORTENER_API_URL: &str = "https://cleanuri.com/api/v1/shorten";

// =============================================================================
// Error Messages
// =============================================================================

/// Error message when a signup field is missing or blank
pub const ERR_ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// Error message when the phone field is missing or blank
pub const ERR_PHONE_REQUIRED: &str = "Phone number is required";

/// Error message when either verification field is missing or blank
pub const ERR_PHONE_AND_OTP_REQUIRED: &str = "Phone and OTP are required";

/// Error message when the url field is missing or blank
pub const ERR_URL_REQUIRED: &str = "URL is required";
