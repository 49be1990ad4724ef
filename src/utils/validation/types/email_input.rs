//! Represents a validated email address.
//!
//! The check is a format check only: a local part, an `@`, and a domain
//! with at least one dot, none of them containing whitespace or another `@`.
//! The input is taken as typed; nothing is trimmed or lowercased.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::utils::validation::{ValidationError, EMAIL_PATTERN};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(EMAIL_PATTERN).expect("Failed to compile email regex")
});

/// Returns whether `email` looks like `local-part@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// An email address that passed [`is_valid_email`]. This type can only be
/// constructed through validation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmailInput {
    email: String,
}

impl EmailInput {
    /// Creates a new `EmailInput` after validating the provided email string.
    ///
    /// # Returns
    /// * `Ok(EmailInput)` if the email is valid
    /// * `Err(ValidationError::InvalidEmail)` otherwise
    pub fn new(email: &str) -> Result<Self, ValidationError> {
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self {
            email: email.to_string(),
        })
    }
}

impl fmt::Display for EmailInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.email)
    }
}
