//! Login form: credentials panel plus a password recovery panel.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

use super::CredentialForm;
use crate::utils::validation::ValidationError;

/// Which of the two mutually exclusive login panels is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Credentials,
    Recovery,
}

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    email: String,
    password: String,
    error: Option<ValidationError>,
    recovery: bool,
}

impl LoginForm {
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.error = None;
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        self.error = None;
    }

    /// Switches to the recovery panel. Field values and the error are kept.
    pub fn show_recovery(&mut self) {
        self.recovery = true;
    }

    /// Switches back to the credentials panel.
    pub fn hide_recovery(&mut self) {
        self.recovery = false;
    }

    pub fn panel(&self) -> Panel {
        if self.recovery {
            Panel::Recovery
        } else {
            Panel::Credentials
        }
    }

    /// Template data for the login page. The password is left out.
    pub fn view(&self) -> Value {
        json!({
            "email": self.email,
            "error": self.error_message(),
            "recovery": self.panel() == Panel::Recovery,
        })
    }
}

impl CredentialForm for LoginForm {
    fn email(&self) -> &str {
        &self.email
    }

    fn password(&self) -> &str {
        &self.password
    }

    fn error(&self) -> Option<ValidationError> {
        self.error
    }

    fn set_error(&mut self, error: Option<ValidationError>) {
        self.error = error;
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("error", &self.error)
            .field("recovery", &self.recovery)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(email: &str, password: &str) -> LoginForm {
        let mut form = LoginForm::default();
        form.set_email(email);
        form.set_password(password);
        form
    }

    #[test]
    fn test_new_form_is_blank() {
        let form = LoginForm::default();
        assert_eq!(form.email(), "");
        assert_eq!(form.password(), "");
        assert_eq!(form.error_message(), "");
        assert_eq!(form.panel(), Panel::Credentials);
    }

    #[test]
    fn test_submit_scenarios() {
        let cases = vec![
            ("foo", "abcdef", "Por favor, introduce un correo electrónico válido."),
            ("foo@bar.com", "abc", "La contraseña debe tener al menos 6 caracteres."),
            ("foo@bar.com", "abcdef", ""),
        ];

        for (email, password, expected) in cases {
            let mut form = filled(email, password);
            let _ = form.submit();
            assert_eq!(
                form.error_message(),
                expected,
                "Unexpected error for {:?} / {:?}", email, password
            );
        }
    }

    #[test]
    fn test_successful_submit_clears_previous_error() {
        let mut form = filled("foo", "abcdef");
        assert_eq!(form.submit(), Err(ValidationError::InvalidEmail));

        form.email = "foo@bar.com".to_string();
        assert_eq!(form.error(), Some(ValidationError::InvalidEmail));
        assert!(form.submit().is_ok());
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_editing_any_field_clears_error() {
        let mut form = filled("foo", "abcdef");
        let _ = form.submit();
        form.set_email("foo@");
        assert_eq!(form.error(), None);

        let mut form = filled("foo@bar.com", "abc");
        let _ = form.submit();
        form.set_password("abcd");
        assert_eq!(form.error(), None);
    }

    #[test]
    fn test_recovery_toggle_keeps_fields() {
        let mut form = filled("foo@bar.com", "abc");
        let _ = form.submit();

        form.show_recovery();
        assert_eq!(form.panel(), Panel::Recovery);
        form.hide_recovery();
        assert_eq!(form.panel(), Panel::Credentials);

        assert_eq!(form.email(), "foo@bar.com");
        assert_eq!(form.password(), "abc");
        assert_eq!(form.error(), Some(ValidationError::WeakPassword));
    }

    #[test]
    fn test_recovery_mode_does_not_affect_validation() {
        let mut form = filled("foo@bar.com", "abcdef");
        form.show_recovery();
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_view_omits_password() {
        let mut form = filled("foo@bar.com", "hunter22");
        let _ = form.submit();
        let view = form.view();
        assert_eq!(view["email"], "foo@bar.com");
        assert_eq!(view["error"], "");
        assert_eq!(view["recovery"], false);
        assert!(view.get("password").is_none());
        assert!(!format!("{:?}", form).contains("hunter22"));
    }
}
