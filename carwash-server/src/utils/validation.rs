//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are generous UX bounds; the in-memory registry has no schema to
//! enforce them, so the boundary does.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Display names: car name, employee name
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: plate numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-blank and within the length limit.
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
