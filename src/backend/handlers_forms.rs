//! Handlers of the login and registration pages.
//!
//! Each visitor owns one instance of each form, kept in their session. A
//! POST applies the edited fields, performs the clicked action, stores the
//! form back, and re-renders the same page. A passing submission is not
//! forwarded anywhere.

use axum::{response::Html, Extension, Form};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tower_sessions::Session;

use crate::backend::handlers_pages::render_page;
use crate::backend::models::{LoginAction, LoginPayload, RegisterPayload};
use crate::config::Config;
use crate::consts::{LOGIN_FORM_KEY, REGISTER_FORM_KEY};
use crate::forms::{CredentialForm, LoginForm, RegisterForm};
use crate::utils::error_messages::AppError;

/// Loads the visitor's form, or a fresh one on the first visit.
fn load_form<T: DeserializeOwned + Default>(session: &Session, key: &str) -> Result<T, AppError> {
    Ok(session.get::<T>(key)?.unwrap_or_default())
}

fn store_form<T: Serialize>(session: &Session, key: &str, form: &T) -> Result<(), AppError> {
    session.insert(key, form)?;
    Ok(())
}

/// Displays the login page in its current panel
pub async fn login_page(
    Extension(config): Extension<Arc<Config>>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let form: LoginForm = load_form(&session, LOGIN_FORM_KEY)?;
    render_page(&config, "login", form.view())
}

/// Handles every button of both login panels
pub async fn login_submit(
    Extension(config): Extension<Arc<Config>>,
    session: Session,
    Form(payload): Form<LoginPayload>,
) -> Result<Html<String>, AppError> {
    let mut form: LoginForm = load_form(&session, LOGIN_FORM_KEY)?;
    payload.apply_to(&mut form);

    match payload.action {
        LoginAction::Submit => match form.submit() {
            Ok(email) => log::info!("login form accepted for {}", email),
            Err(e) => log::debug!("login form rejected: {}", e.kind()),
        },
        LoginAction::Recover => form.show_recovery(),
        LoginAction::Back => form.hide_recovery(),
        LoginAction::RequestRecovery => log::info!("password recovery requested"),
    }

    store_form(&session, LOGIN_FORM_KEY, &form)?;
    render_page(&config, "login", form.view())
}

/// Displays the registration page
pub async fn register_page(
    Extension(config): Extension<Arc<Config>>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let form: RegisterForm = load_form(&session, REGISTER_FORM_KEY)?;
    render_page(&config, "register", form.view())
}

/// Validates the registration form. No account is created.
pub async fn register_submit(
    Extension(config): Extension<Arc<Config>>,
    session: Session,
    Form(payload): Form<RegisterPayload>,
) -> Result<Html<String>, AppError> {
    let mut form: RegisterForm = load_form(&session, REGISTER_FORM_KEY)?;
    payload.apply_to(&mut form);

    match form.submit() {
        Ok(email) => log::info!("registration form accepted for {}", email),
        Err(e) => log::debug!("registration form rejected: {}", e.kind()),
    }

    store_form(&session, REGISTER_FORM_KEY, &form)?;
    render_page(&config, "register", form.view())
}
