use serde::{Deserialize, Serialize};

use super::shared::{FieldErrors, is_blank};
use crate::error::AppError;

const PASSWORD_MIN: usize = 6;
const PASSWORD_MAX: usize = 128;

/// Request body for account registration.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    /// Account email; matched case-insensitively.
    #[schema(example = "fred@example.com")]
    pub email: String,
    /// Password (6-128 characters).
    #[schema(example = "password")]
    pub password: String,
}

/// Trim and lowercase an email so lookups are case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

pub fn validate_register_request(payload: &RegisterRequest) -> Result<(), AppError> {
    let mut errors = FieldErrors::new();

    let email = normalize_email(&payload.email);
    if errors.require_present("Email", &email) && !looks_like_email(&email) {
        errors.add("Email", "is invalid");
    }

    let len = payload.password.chars().count();
    if payload.password.is_empty() {
        errors.add("Password", "can't be blank");
    } else if len < PASSWORD_MIN {
        errors.add(
            "Password",
            &format!("is too short (minimum is {PASSWORD_MIN} characters)"),
        );
    } else if len > PASSWORD_MAX {
        errors.add(
            "Password",
            &format!("is too long (maximum is {PASSWORD_MAX} characters)"),
        );
    }

    errors.into_result()
}

/// Request body for login.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    #[schema(example = "fred@example.com")]
    pub email: String,
    #[schema(example = "password")]
    pub password: String,
}

pub fn validate_login_request(payload: &LoginRequest) -> Result<(), AppError> {
    if is_blank(&payload.email) {
        return Err(AppError::Validation("Email can't be blank".into()));
    }
    if payload.password.is_empty() {
        return Err(AppError::Validation("Password can't be blank".into()));
    }
    Ok(())
}

/// Public view of an account.
#[derive(Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "fred@example.com")]
    pub email: String,
}

impl From<crate::entity::user::Model> for UserResponse {
    fn from(user: crate::entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// Successful login response. The token is also set as the session cookie.
#[derive(Serialize, utoipa::ToSchema)]
pub struct LoginResponse {
    /// Bearer token, valid for `auth.token_ttl_hours`.
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "fred@example.com")]
    pub email: String,
}
