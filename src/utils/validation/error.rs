//! Errors raised when a form field fails its check.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A local, recoverable validation failure. The display text is the message
/// shown to the visitor in the form's error banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Por favor, introduce un correo electrónico válido.")]
    InvalidEmail,
    #[error("La contraseña debe tener al menos 6 caracteres.")]
    WeakPassword,
}

impl ValidationError {
    /// Machine-readable name of the failed check
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::InvalidEmail => "invalid_email",
            ValidationError::WeakPassword => "weak_password",
        }
    }
}
