use crate::application::error::ApiError;
use crate::domain::users::user::{self, UserRole, MIN_PASSWORD_LEN};

/// Trims the value and rejects it when nothing is left.
pub fn required_text(field: &'static str, value: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Blank optional fields collapse to `None`.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn valid_email(value: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if !user::is_valid_email(trimmed) {
        return Err(ApiError::Validation("email is not a valid address".into()));
    }
    Ok(trimmed.to_string())
}

pub fn valid_password(value: &str) -> Result<(), ApiError> {
    if !user::is_valid_password(value) {
        return Err(ApiError::Validation(format!(
            "password must be at least {} characters long",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// A missing role falls back to the default customer role.
pub fn parse_role(value: Option<&str>) -> Result<UserRole, ApiError> {
    match value {
        None => Ok(UserRole::default()),
        Some(raw) => UserRole::parse(raw.trim())
            .ok_or_else(|| ApiError::Validation("role must be either admin or client".into())),
    }
}
