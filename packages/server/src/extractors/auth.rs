use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use sea_orm::EntityTrait;

use crate::entity::user;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt;

/// Name of the cookie that carries the session token for browser clients.
pub const SESSION_COOKIE: &str = "microblog_session";

/// Authenticated user, taken from `Authorization: Bearer <token>` or, when
/// that header is absent, from the session cookie.
///
/// Add this as a handler parameter to require authentication. The token must
/// verify and its user must still exist.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: i32,
    pub email: String,
}

impl AuthUser {
    /// Returns `Ok(())` if the caller is the owner of a record authored by `owner_id`.
    pub fn require_owner(&self, owner_id: i32) -> Result<(), AppError> {
        if self.user_id == owner_id {
            Ok(())
        } else {
            Err(AppError::PermissionDenied)
        }
    }
}

fn bearer_token(parts: &Parts) -> Result<Option<String>, AppError> {
    let Some(header) = parts.headers.get("Authorization") else {
        return Ok(None);
    };
    let value = header.to_str().map_err(|_| AppError::TokenInvalid)?;
    let token = value
        .strip_prefix("Bearer ")
        .ok_or(AppError::TokenInvalid)?;
    Ok(Some(token.to_string()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = match bearer_token(parts)? {
            Some(token) => token,
            None => CookieJar::from_headers(&parts.headers)
                .get(SESSION_COOKIE)
                .map(|c| c.value().to_string())
                .ok_or(AppError::TokenMissing)?,
        };

        let claims = jwt::verify(&token, &state.config.auth.jwt_secret)
            .map_err(|_| AppError::TokenInvalid)?;

        let user = user::Entity::find_by_id(claims.uid)
            .one(&state.db)
            .await?
            .ok_or(AppError::TokenInvalid)?;

        Ok(AuthUser {
            user_id: user.id,
            email: user.email,
        })
    }
}
