//! Request payloads of the storefront forms.

use serde::de::{value::StrDeserializer, Deserializer, IntoDeserializer};
use serde::Deserialize;

use crate::forms::{CredentialForm, LoginForm, RegisterForm};

/// What the visitor clicked on the login page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginAction {
    /// "Iniciar Sesión"
    #[default]
    Submit,
    /// "¿Olvidó su contraseña?"
    Recover,
    /// "Volver a Inicio de sesión"
    Back,
    /// "Recuperar"
    RequestRecovery,
}

/// Body posted by either login panel. The recovery panel has no password
/// input, so a missing field leaves the stored value alone.
#[derive(Debug, Default, Deserialize)]
pub struct LoginPayload {
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(default, deserialize_with = "blank_as_submit")]
    pub action: LoginAction,
}

/// An empty `action` is what a form sends for a button without a value.
fn blank_as_submit<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LoginAction, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(LoginAction::Submit),
        Some(name) => {
            let name: StrDeserializer<'_, D::Error> = name.into_deserializer();
            LoginAction::deserialize(name)
        }
    }
}

impl LoginPayload {
    /// Copies the posted values into the form. Only values that differ
    /// count as an edit, so an unchanged field keeps the current error.
    ///
    /// The password input is always rendered blank, so its posted value is
    /// only taken on a submission. Switching panels keeps the stored one.
    pub fn apply_to(&self, form: &mut LoginForm) {
        if let Some(email) = self.email.as_deref().filter(|v| *v != form.email()) {
            form.set_email(email);
        }
        if self.action != LoginAction::Submit {
            return;
        }
        if let Some(password) = self.password.as_deref().filter(|v| *v != form.password()) {
            form.set_password(password);
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RegisterPayload {
    pub nombre: Option<String>,
    pub apellido: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl RegisterPayload {
    pub fn apply_to(&self, form: &mut RegisterForm) {
        if let Some(nombre) = self.nombre.as_deref().filter(|v| *v != form.first_name()) {
            form.set_first_name(nombre);
        }
        if let Some(apellido) = self.apellido.as_deref().filter(|v| *v != form.last_name()) {
            form.set_last_name(apellido);
        }
        if let Some(email) = self.email.as_deref().filter(|v| *v != form.email()) {
            form.set_email(email);
        }
        if let Some(password) = self.password.as_deref().filter(|v| *v != form.password()) {
            form.set_password(password);
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}
