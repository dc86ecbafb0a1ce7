//! User-facing validation failures.
//!
//! These never change state; handlers flash the message and send the visitor
//! back to the form they came from.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Item title missing or blank.
    TitleRequired,
    /// Photo extension outside the allowed set.
    InvalidImageType,
    /// Claimant name or email missing or blank.
    ClaimantRequired,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::TitleRequired => f.write_str("Title is required."),
            ValidationError::InvalidImageType => {
                f.write_str("Invalid image type. Allowed: png, jpg, jpeg, gif, webp")
            }
            ValidationError::ClaimantRequired => f.write_str("Name and email are required."),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trims a form value, mapping blank input to `None`.
pub fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
