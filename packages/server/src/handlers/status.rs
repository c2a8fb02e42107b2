use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::TargetKind;
use sea_orm::*;
use tracing::instrument;

use crate::engagement::{self, TargetRef};
use crate::entity::status;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::status::*;
use crate::state::AppState;
use crate::utils::content::{author_email, find_status};

#[utoipa::path(
    get,
    path = "/new",
    tag = "Statuses",
    operation_id = "newStatus",
    summary = "Empty status draft",
    description = "Returns the payload shape `POST /statuses` expects, with empty fields.",
    responses(
        (status = 200, description = "Empty draft", body = CreateStatusRequest),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
pub async fn new_status(_auth_user: AuthUser) -> Json<CreateStatusRequest> {
    Json(CreateStatusRequest::default())
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Statuses",
    operation_id = "createStatus",
    summary = "Post a status",
    request_body = CreateStatusRequest,
    responses(
        (status = 201, description = "Status created", body = StatusResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(user_id = auth_user.user_id))]
pub async fn create_status(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_status(&payload)?;

    let now = chrono::Utc::now();
    let new_status = status::ActiveModel {
        content: Set(payload.content),
        user_id: Set(auth_user.user_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_status.insert(&state.db).await?;
    tracing::info!(status_id = model.id, "Status created");

    Ok((StatusCode::CREATED, Json(StatusResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Statuses",
    operation_id = "getStatus",
    summary = "Get a status with its comments and likes",
    params(("id" = i32, Path, description = "Status ID")),
    responses(
        (status = 200, description = "Status details", body = StatusDetailResponse),
        (status = 404, description = "Status not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<StatusDetailResponse>, AppError> {
    let model = find_status(&state.db, id).await?;
    let target = TargetRef::new(TargetKind::Status, model.id);

    let author_email = author_email(&state.db, model.user_id).await?;
    let comments = engagement::comments_on(&state.db, target).await?;
    let likes = engagement::likes_on(&state.db, target).await?;

    Ok(Json(StatusDetailResponse {
        id: model.id,
        content: model.content,
        user_id: model.user_id,
        author_email,
        comments: comments.into_iter().map(Into::into).collect(),
        likes: likes.into_iter().map(Into::into).collect(),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Statuses",
    operation_id = "deleteStatus",
    summary = "Delete a status",
    description = "Deletes the status and every comment and like on it. Only the author may delete.",
    params(("id" = i32, Path, description = "Status ID")),
    responses(
        (status = 204, description = "Status deleted"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Not the author (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Status not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id, user_id = auth_user.user_id))]
pub async fn delete_status(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    let target =
        engagement::resolve_for_delete(&txn, TargetRef::new(TargetKind::Status, id)).await?;
    auth_user.require_owner(target.author_id())?;

    let removed = engagement::purge_engagements(&txn, target.kind(), &[target.id()]).await?;
    status::Entity::delete_by_id(target.id()).exec(&txn).await?;

    txn.commit().await?;
    tracing::info!(engagements = removed, "Status deleted");

    Ok(StatusCode::NO_CONTENT)
}
