use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`, `TOKEN_MISSING`,
    /// `TOKEN_INVALID`, `INVALID_CREDENTIALS`, `PERMISSION_DENIED`, `NOT_FOUND`,
    /// `EMAIL_TAKEN`, `INTERNAL_ERROR`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "Url can't be blank, Title can't be blank, Url is invalid")]
    pub message: String,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// One or more validation messages, already joined for display.
    Validation(String),
    TokenMissing,
    TokenInvalid,
    InvalidCredentials,
    PermissionDenied,
    NotFound(String),
    EmailTaken,
    /// Logged server-side; clients only see a generic message.
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::TokenMissing | AppError::TokenInvalid | AppError::InvalidCredentials => {
                StatusCode::UNAUTHORIZED
            }
            AppError::PermissionDenied => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::EmailTaken => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::TokenMissing => "TOKEN_MISSING",
            AppError::TokenInvalid => "TOKEN_INVALID",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::PermissionDenied => "PERMISSION_DENIED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::EmailTaken => "EMAIL_TAKEN",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn into_message(self) -> String {
        match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg,
            AppError::TokenMissing => "You need to sign in before continuing".into(),
            AppError::TokenInvalid => "Invalid or expired session".into(),
            AppError::InvalidCredentials => "Invalid email or password".into(),
            AppError::PermissionDenied => "You are not allowed to modify this resource".into(),
            AppError::EmailTaken => "Email has already been taken".into(),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                "An unexpected error occurred".into()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            code: self.code(),
            message: self.into_message(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Internal(err.to_string())
    }
}
