//! Registration form.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

use super::CredentialForm;
use crate::utils::validation::ValidationError;

/// Names are free text and are never validated.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterForm {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    error: Option<ValidationError>,
}

impl RegisterForm {
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
        self.error = None;
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
        self.error = None;
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.error = None;
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        self.error = None;
    }

    /// Template data for the registration page. The password is left out.
    pub fn view(&self) -> Value {
        json!({
            "nombre": self.first_name,
            "apellido": self.last_name,
            "email": self.email,
            "error": self.error_message(),
        })
    }
}

impl CredentialForm for RegisterForm {
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

impl fmt::Debug for RegisterForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("error", &self.error)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(email: &str, password: &str) -> RegisterForm {
        let mut form = RegisterForm::default();
        form.set_first_name("Ana");
        form.set_last_name("Quispe");
        form.set_email(email);
        form.set_password(password);
        form
    }

    #[test]
    fn test_submit_order_matches_login() {
        let cases = vec![
            ("foo", "abc", Err(ValidationError::InvalidEmail)),
            ("foo", "abcdef", Err(ValidationError::InvalidEmail)),
            ("foo@bar.com", "abc", Err(ValidationError::WeakPassword)),
            ("foo@bar.com", "abcdef", Ok(())),
        ];

        for (email, password, expected) in cases {
            let mut form = filled(email, password);
            assert_eq!(form.submit().map(|_| ()), expected, "Unexpected result for {:?}", email);
            assert_eq!(form.error(), expected.err());
        }
    }

    #[test]
    fn test_names_are_not_validated() {
        let mut form = RegisterForm::default();
        form.set_first_name("");
        form.set_last_name("   ");
        form.set_email("ana@tienda.pe");
        form.set_password("abcdef");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_editing_any_field_clears_error() {
        for field in ["nombre", "apellido", "email", "password"] {
            let mut form = filled("foo", "abc");
            let _ = form.submit();
            assert!(form.error().is_some());

            match field {
                "nombre" => form.set_first_name("Luz"),
                "apellido" => form.set_last_name("Huamán"),
                "email" => form.set_email("foo@bar"),
                _ => form.set_password("x"),
            }
            assert_eq!(form.error(), None, "Editing {} kept the error", field);
        }
    }

    #[test]
    fn test_view() {
        let mut form = filled("foo", "secreto");
        let _ = form.submit();
        let view = form.view();
        assert_eq!(view["nombre"], "Ana");
        assert_eq!(view["apellido"], "Quispe");
        assert_eq!(view["email"], "foo");
        assert_eq!(view["error"], "Por favor, introduce un correo electrónico válido.");
        assert!(view.get("password").is_none());
        assert!(!format!("{:?}", form).contains("secreto"));
    }
}
