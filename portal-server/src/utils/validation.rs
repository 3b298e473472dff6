//! Input validation helpers
//!
//! Centralized text length constants and validation functions for the CRUD
//! handlers. The in-memory stores enforce nothing themselves, so all shape
//! checks live here.

use rust_decimal::Decimal;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: employee name, department, title
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Free-text review comments
pub const MAX_COMMENT_LEN: usize = 500;

/// Short labels: month, review period
pub const MAX_LABEL_LEN: usize = 20;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is non-empty and within the
/// length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        validate_required_text(v, field, max_len)?;
    }
    Ok(())
}

/// Validate a month label of the form `YYYY-MM`.
pub fn validate_month_label(value: &str) -> Result<(), AppError> {
    let valid = value.len() == 7
        && value.as_bytes()[4] == b'-'
        && value[..4].chars().all(|c| c.is_ascii_digit())
        && value[5..].chars().all(|c| c.is_ascii_digit())
        && value[5..].parse::<u8>().is_ok_and(|m| (1..=12).contains(&m));
    if !valid {
        return Err(AppError::validation(format!(
            "month must look like YYYY-MM, got '{value}'"
        )));
    }
    Ok(())
}

/// Validate that a payroll amount is not negative.
pub fn validate_amount(value: Decimal, field: &str) -> Result<(), AppError> {
    if value < Decimal::ZERO {
        return Err(AppError::validation(format!(
            "{field} must not be negative"
        )));
    }
    Ok(())
}

/// Validate a performance rating (1.0 - 5.0).
pub fn validate_rating(rating: f64) -> Result<(), AppError> {
    if !rating.is_finite() || !(1.0..=5.0).contains(&rating) {
        return Err(AppError::validation(format!(
            "rating must be between 1.0 and 5.0, got {rating}"
        )));
    }
    Ok(())
}
