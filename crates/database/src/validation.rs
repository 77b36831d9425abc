//! Input validation for stored fields.

use std::fmt;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid email format.
    InvalidEmail(String),
    /// Value too short.
    TooShort { field: String, min: usize, actual: usize },
    /// Value too long.
    TooLong { field: String, max: usize, actual: usize },
    /// Empty value where one is required.
    Empty(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidEmail(msg) => write!(f, "Invalid email: {}", msg),
            ValidationError::TooShort { field, min, actual } => {
                write!(f, "{} is too short ({} chars, min {})", field, actual, min)
            }
            ValidationError::TooLong { field, max, actual } => {
                write!(f, "{} is too long ({} chars, max {})", field, actual, max)
            }
            ValidationError::Empty(field) => write!(f, "{} cannot be empty", field),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Minimum allowed length for usernames.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum allowed length for usernames.
pub const MAX_USERNAME_LENGTH: usize = 50;

/// Maximum allowed length for email addresses.
pub const MAX_EMAIL_LENGTH: usize = 100;

/// Maximum allowed length for language names.
pub const MAX_LANGUAGE_NAME_LENGTH: usize = 50;

/// Maximum allowed length for language extensions.
pub const MAX_EXTENSION_LENGTH: usize = 10;

/// Check a value's character count against an inclusive range.
fn check_length(field: &str, value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let actual = value.chars().count();

    if actual == 0 {
        return Err(ValidationError::Empty(field.to_string()));
    }

    if actual < min {
        return Err(ValidationError::TooShort {
            field: field.to_string(),
            min,
            actual,
        });
    }

    if actual > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
            actual,
        });
    }

    Ok(())
}

/// Validate a username (3-50 characters).
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    check_length(
        "username",
        username.trim(),
        MIN_USERNAME_LENGTH,
        MAX_USERNAME_LENGTH,
    )
}

/// Validate an email address (basic RFC 5322 format check).
///
/// This is a basic validation that checks:
/// - Contains exactly one @
/// - Has at least one character before @
/// - Has at least one dot after @, not at either end
/// - Is not too long
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();

    check_length("email", email, 1, MAX_EMAIL_LENGTH)?;

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(ValidationError::InvalidEmail(
            "must contain exactly one @ symbol".to_string(),
        ));
    }

    let (local, domain) = (parts[0], parts[1]);

    if local.is_empty() {
        return Err(ValidationError::InvalidEmail(
            "missing local part (before @)".to_string(),
        ));
    }

    if domain.is_empty() {
        return Err(ValidationError::InvalidEmail(
            "missing domain (after @)".to_string(),
        ));
    }

    if !domain.contains('.') {
        return Err(ValidationError::InvalidEmail(
            "domain must contain at least one dot".to_string(),
        ));
    }

    if domain.starts_with('.') || domain.ends_with('.') {
        return Err(ValidationError::InvalidEmail(
            "domain cannot start or end with a dot".to_string(),
        ));
    }

    if domain.contains("..") {
        return Err(ValidationError::InvalidEmail(
            "domain cannot contain consecutive dots".to_string(),
        ));
    }

    if email.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail(
            "cannot contain whitespace".to_string(),
        ));
    }

    Ok(())
}

/// Validate a language display name (1-50 characters).
pub fn validate_language_name(name: &str) -> Result<(), ValidationError> {
    check_length("language name", name.trim(), 1, MAX_LANGUAGE_NAME_LENGTH)
}

/// Validate a language file extension (1-10 characters).
pub fn validate_extension(extension: &str) -> Result<(), ValidationError> {
    check_length("extension", extension.trim(), 1, MAX_EXTENSION_LENGTH)
}
