//! Constants used throughout the validation system

/// Pattern an email address must match: a local part and a domain free of
/// whitespace and `@`, and a dot before a non-empty last segment.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Minimum number of characters a password must contain
pub const MIN_PASSWORD_LENGTH: usize = 6;
