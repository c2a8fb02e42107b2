use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use common::TargetKind;
use sea_orm::sea_query::LockType;
use sea_orm::*;
use tracing::instrument;

use crate::engagement;
use crate::entity::{comment, like, link, status, user};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::{AuthUser, SESSION_COOKIE};
use crate::extractors::json::AppJson;
use crate::models::auth::{
    LoginRequest, LoginResponse, RegisterRequest, UserResponse, normalize_email,
    validate_login_request, validate_register_request,
};
use crate::state::AppState;
use crate::utils::{hash, jwt};

#[utoipa::path(
    post,
    path = "/register",
    tag = "Auth",
    operation_id = "register",
    summary = "Register a new account",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "Email already registered (EMAIL_TAKEN)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_register_request(&payload)?;

    let email = normalize_email(&payload.email);

    let taken = user::Entity::find()
        .filter(user::Column::Email.eq(&email))
        .one(&state.db)
        .await?
        .is_some();
    if taken {
        return Err(AppError::EmailTaken);
    }

    let hash = hash::hash_password(&payload.password)
        .map_err(|e| AppError::Internal(format!("Password hash error: {}", e)))?;

    let new_user = user::ActiveModel {
        email: Set(email),
        password: Set(hash),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let user = new_user.insert(&state.db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            tracing::debug!("Registration race condition: unique constraint caught on insert");
            AppError::EmailTaken
        }
        _ => AppError::from(e),
    })?;

    tracing::info!(user_id = user.id, "Account registered");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    operation_id = "login",
    summary = "Sign in",
    description = "Returns a bearer token and sets it as the `microblog_session` cookie.",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in", body = LoginResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Wrong email or password (INVALID_CREDENTIALS)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, jar, payload))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    validate_login_request(&payload)?;

    let email = normalize_email(&payload.email);

    let user = user::Entity::find()
        .filter(user::Column::Email.eq(&email))
        .one(&state.db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let is_valid = hash::verify_password(&payload.password, &user.password)
        .map_err(|e| AppError::Internal(format!("Password verify error: {}", e)))?;

    if !is_valid {
        return Err(AppError::InvalidCredentials);
    }

    let auth = &state.config.auth;
    let token = jwt::sign(user.id, &user.email, &auth.jwt_secret, auth.token_ttl_hours)
        .map_err(|e| AppError::Internal(format!("JWT sign error: {}", e)))?;

    let cookie = Cookie::build((SESSION_COOKIE, token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            token,
            id: user.id,
            email: user.email,
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/session",
    tag = "Auth",
    operation_id = "logout",
    summary = "Sign out",
    description = "Clears the session cookie. Bearer tokens stay valid until they expire.",
    responses((status = 204, description = "Signed out")),
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    (
        jar.remove(Cookie::build(SESSION_COOKIE).path("/")),
        StatusCode::NO_CONTENT,
    )
}

#[utoipa::path(
    get,
    path = "/me",
    tag = "Auth",
    operation_id = "me",
    summary = "Current account",
    responses(
        (status = 200, description = "Signed-in account", body = UserResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(auth_user), fields(user_id = auth_user.user_id))]
pub async fn me(auth_user: AuthUser) -> Json<UserResponse> {
    Json(UserResponse {
        id: auth_user.user_id,
        email: auth_user.email,
    })
}

#[utoipa::path(
    delete,
    path = "/me",
    tag = "Auth",
    operation_id = "deleteAccount",
    summary = "Delete the current account",
    description = "Deletes the account, its statuses and links with every comment and like on them, and every comment and like the account authored. Also clears the session cookie.",
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, jar), fields(user_id = auth_user.user_id))]
pub async fn delete_account(
    auth_user: AuthUser,
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, StatusCode), AppError> {
    let user_id = auth_user.user_id;
    let txn = state.db.begin().await?;

    let status_ids: Vec<i32> = status::Entity::find()
        .select_only()
        .column(status::Column::Id)
        .filter(status::Column::UserId.eq(user_id))
        .lock(LockType::Update)
        .into_tuple()
        .all(&txn)
        .await?;
    let link_ids: Vec<i32> = link::Entity::find()
        .select_only()
        .column(link::Column::Id)
        .filter(link::Column::UserId.eq(user_id))
        .lock(LockType::Update)
        .into_tuple()
        .all(&txn)
        .await?;

    let mut engagements =
        engagement::purge_engagements(&txn, TargetKind::Status, &status_ids).await?;
    engagements += engagement::purge_engagements(&txn, TargetKind::Link, &link_ids).await?;

    let comments = comment::Entity::delete_many()
        .filter(comment::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?;
    let likes = like::Entity::delete_many()
        .filter(like::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?;

    status::Entity::delete_many()
        .filter(status::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?;
    link::Entity::delete_many()
        .filter(link::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?;
    user::Entity::delete_by_id(user_id).exec(&txn).await?;

    txn.commit().await?;

    tracing::info!(
        statuses = status_ids.len(),
        links = link_ids.len(),
        engagements = engagements + comments.rows_affected + likes.rows_affected,
        "Account deleted"
    );

    Ok((
        jar.remove(Cookie::build(SESSION_COOKIE).path("/")),
        StatusCode::NO_CONTENT,
    ))
}
