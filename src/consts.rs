//! Global constants for the storefront.

pub const HTTP_PORT: u16 = 8080; // Default port of the HTTP server.
pub const ANNOUNCEMENT: &str = "🎉 DESCUENTO DEL 20% EN TODOS LOS PRODUCTOS 🎉"; // Default banner text.

pub const ENV_PREFIX: &str = "STOREFRONT"; // Prefix of the environment overrides, e.g. STOREFRONT_PORT.

pub const LOGIN_FORM_KEY: &str = "login_form"; // Session key of the login form state.
pub const REGISTER_FORM_KEY: &str = "register_form"; // Session key of the registration form state.
