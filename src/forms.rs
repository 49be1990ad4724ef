//! Per-visitor state of the storefront forms.
//!
//! Each form owns its field values and the message of its last failed
//! submission. Editing a field clears that message; submitting runs the
//! credential checks and records the outcome.

pub mod login;
pub mod register;

pub use login::LoginForm;
pub use register::RegisterForm;

use crate::utils::validation::{validate_credentials, EmailInput, ValidationError};

/// The submission shape shared by the login and registration forms.
pub trait CredentialForm {
    fn email(&self) -> &str;

    fn password(&self) -> &str;

    fn error(&self) -> Option<ValidationError>;

    fn set_error(&mut self, error: Option<ValidationError>);

    /// Checks the email, then the password, and keeps the first failure as
    /// the form's error. A passing submission clears the error and hands
    /// back the accepted address.
    fn submit(&mut self) -> Result<EmailInput, ValidationError> {
        let outcome = validate_credentials(self.email(), self.password());
        self.set_error(outcome.as_ref().err().copied());
        outcome
    }

    /// Text of the error banner, empty when no error is active
    fn error_message(&self) -> String {
        self.error().map(|e| e.to_string()).unwrap_or_default()
    }
}
