use crate::error::{AppError, Result};

/// Extract a required field, trimmed
///
/// Missing fields and fields that are empty after trimming both fail with the
/// endpoint's canonical message, so a request with `"phone": "  "` reads the
/// same as one with no phone at all.
pub fn required_trimmed(value: Option<&str>, missing_message: &str) -> Result<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::Validation(missing_message.to_string())),
    }
}
