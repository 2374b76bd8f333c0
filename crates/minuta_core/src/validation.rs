//! Field validators for the login form.
//!
//! Both validators take `reveal_errors`, which is false until the user has
//! attempted a submit. Before that an empty field is not reported.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Minimum accepted password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Hint shown under the password field while it has no error.
pub const PASSWORD_HINT: &str = "minimum 6 characters with at least one digit";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

/// A violated field rule. `Display` is the message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("email required")]
    EmailRequired,
    #[error("invalid email format")]
    InvalidEmailFormat,
    #[error("password required")]
    PasswordRequired,
    #[error("minimum 6 characters")]
    PasswordTooShort,
    #[error("must contain at least one digit")]
    PasswordMissingDigit,
}

/// Outcome of validating one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationResult {
    error: Option<FieldError>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self { error: None }
    }

    pub fn invalid(error: FieldError) -> Self {
        Self { error: Some(error) }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn error(&self) -> Option<FieldError> {
        self.error
    }

    /// Empty when valid.
    pub fn message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }
}

impl From<Result<(), FieldError>> for ValidationResult {
    fn from(result: Result<(), FieldError>) -> Self {
        Self {
            error: result.err(),
        }
    }
}

pub fn validate_email(value: &str, reveal_errors: bool) -> ValidationResult {
    check_email(value, reveal_errors).into()
}

pub fn validate_password(value: &str, reveal_errors: bool) -> ValidationResult {
    check_password(value, reveal_errors).into()
}

fn check_email(value: &str, reveal_errors: bool) -> Result<(), FieldError> {
    if value.is_empty() {
        return required(reveal_errors, FieldError::EmailRequired);
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Err(FieldError::InvalidEmailFormat);
    }
    Ok(())
}

fn check_password(value: &str, reveal_errors: bool) -> Result<(), FieldError> {
    if value.is_empty() {
        return required(reveal_errors, FieldError::PasswordRequired);
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(FieldError::PasswordTooShort);
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err(FieldError::PasswordMissingDigit);
    }
    Ok(())
}

fn required(reveal_errors: bool, error: FieldError) -> Result<(), FieldError> {
    if reveal_errors {
        Err(error)
    } else {
        Ok(())
    }
}
