//! Type definitions for the validation system

mod email_input;
mod password_input;

// Re-export commonly used types and functions
pub use email_input::EmailInput;
pub use password_input::validate_password;
