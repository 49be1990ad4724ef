//! Root module for the validation system.
//! Exposes the field validators and the submission check shared by the forms.

mod constants;
mod error;
mod types;

// Re-export commonly used types and functions
pub use constants::*;
pub use error::ValidationError;
pub use types::{validate_password, EmailInput};

/// Runs the credential checks in their fixed order: the email first, then
/// the password. Only the first failing check is reported.
pub fn validate_credentials(email: &str, password: &str) -> Result<EmailInput, ValidationError> {
    let email = EmailInput::new(email)?;
    validate_password(password)?;
    Ok(email)
}
