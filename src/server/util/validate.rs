//! Request validation.
//!
//! Every request body and path key is checked here before any command reaches a backend,
//! so a rejected request never costs a round trip.

use url::Url;

use crate::server::error::AppError;

pub const USER_NAME_MAX: usize = 100;
pub const PROJECT_NAME_MAX: usize = 100;
pub const PROJECT_DESCRIPTION_MAX: usize = 5000;
pub const ISSUE_TITLE_MAX: usize = 200;
pub const ISSUE_DESCRIPTION_MAX: usize = 10_000;
pub const COMMENT_BODY_MAX: usize = 10_000;
pub const EMAIL_MAX: usize = 254;
pub const PASSWORD_MIN: usize = 7;
/// bcrypt only reads the first 72 bytes of a password.
pub const PASSWORD_MAX: usize = 72;

/// Shape rules for an inbound request type.
pub trait Validate {
    fn validate(&self) -> Result<(), AppError>;
}

/// Requires a value that is not blank.
pub fn required(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Limits a value to `max` characters.
pub fn max_len(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    if value.chars().count() > max {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

/// Requires a non-blank value of at most `max` characters.
pub fn text(field: &str, value: &str, max: usize) -> Result<(), AppError> {
    required(field, value)?;
    max_len(field, value, max)
}

/// Requires a plausible email address: one `@`, a non-empty local part and a dotted domain.
pub fn email(field: &str, value: &str) -> Result<(), AppError> {
    let invalid = || AppError::BadRequest(format!("{} must be a valid email address", field));

    if value.len() > EMAIL_MAX || value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && domain
            .split('.')
            .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'));

    if local.is_empty() || !domain_ok {
        return Err(invalid());
    }
    Ok(())
}

/// Requires an absolute http(s) URL.
pub fn http_url(field: &str, value: &str) -> Result<(), AppError> {
    let invalid = || AppError::BadRequest(format!("{} must be a valid http(s) URL", field));

    let url = Url::parse(value).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    Ok(())
}

/// Requires at least `PASSWORD_MIN` characters with a lowercase letter, an uppercase
/// letter, a digit and a symbol.
pub fn strong_password(field: &str, value: &str) -> Result<(), AppError> {
    let long_enough = value.chars().count() >= PASSWORD_MIN;
    let has_lower = value.chars().any(|c| c.is_lowercase());
    let has_upper = value.chars().any(|c| c.is_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_symbol = value
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    if !(long_enough && has_lower && has_upper && has_digit && has_symbol) {
        return Err(AppError::BadRequest(format!(
            "{} must be at least {} characters and contain a lowercase letter, an uppercase letter, a digit and a symbol",
            field, PASSWORD_MIN
        )));
    }
    password_len(field, value)
}

/// Limits a password to the `PASSWORD_MAX` bytes bcrypt reads.
pub fn password_len(field: &str, value: &str) -> Result<(), AppError> {
    if value.len() > PASSWORD_MAX {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} bytes",
            field, PASSWORD_MAX
        )));
    }
    Ok(())
}

/// Applies `check` when the optional value is present.
pub fn optional<F>(value: Option<&str>, check: F) -> Result<(), AppError>
where
    F: FnOnce(&str) -> Result<(), AppError>,
{
    match value {
        Some(value) => check(value),
        None => Ok(()),
    }
}

/// Requires a strictly positive resource id.
pub fn id(field: &str, value: i32) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::BadRequest(format!("{} must be a positive integer", field)));
    }
    Ok(())
}
