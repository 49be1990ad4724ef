//! Password length policy.

use crate::utils::validation::{ValidationError, MIN_PASSWORD_LENGTH};

/// Returns whether `password` has at least [`MIN_PASSWORD_LENGTH`]
/// characters. Every character counts; there is no complexity rule.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Checks the password length policy.
///
/// # Returns
/// * `Ok(())` if the password is long enough
/// * `Err(ValidationError::WeakPassword)` otherwise
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if !is_valid_password(password) {
        return Err(ValidationError::WeakPassword);
    }
    Ok(())
}
