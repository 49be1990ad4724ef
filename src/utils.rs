//! Shared helpers: field validation and error types.
pub mod error_messages;
pub mod validation;
