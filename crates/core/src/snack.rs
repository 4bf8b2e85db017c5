//! Snack field constants and validation functions.
//!
//! Handlers validate request bodies through these before touching the
//! database so a missing or malformed field surfaces as a 400 with a
//! field-specific message.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a snack title in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of a snack description in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a snack title: must be non-empty and within the length limit.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.is_empty() {
        return Err("Title cannot be empty".to_string());
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(format!(
            "Title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a snack description: must be non-empty and within the length limit.
pub fn validate_description(description: &str) -> Result<(), String> {
    if description.is_empty() {
        return Err("Description cannot be empty".to_string());
    }
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(format!(
            "Description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters"
        ));
    }
    Ok(())
}
