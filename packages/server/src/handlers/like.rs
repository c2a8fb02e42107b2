use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::TargetKind;
use sea_orm::{EntityTrait, TransactionTrait};
use tracing::instrument;

use crate::engagement::{self, TargetRef};
use crate::entity::like;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::engagement::{CreateLikeRequest, LikeResponse};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/",
    tag = "Likes",
    operation_id = "createLike",
    summary = "Like a status or a link",
    description = "The target is named by `status_id` or `link_id`. When both are present the status is liked. A user may like the same target more than once.",
    request_body = CreateLikeRequest,
    responses(
        (status = 201, description = "Like created", body = LikeResponse),
        (status = 400, description = "Neither id given (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Target not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
pub async fn create_like(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateLikeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let target = engagement::select_target(&payload)?;
    like_target(&state, &auth_user, target).await
}

#[utoipa::path(
    post,
    path = "/{id}/likes",
    tag = "Likes",
    operation_id = "likeStatus",
    summary = "Like a status",
    params(("id" = i32, Path, description = "Status ID")),
    responses(
        (status = 201, description = "Like created", body = LikeResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Status not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
pub async fn like_status(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    like_target(&state, &auth_user, TargetRef::new(TargetKind::Status, id)).await
}

#[utoipa::path(
    post,
    path = "/{id}/likes",
    tag = "Likes",
    operation_id = "likeLink",
    summary = "Like a link",
    params(("id" = i32, Path, description = "Link ID")),
    responses(
        (status = 201, description = "Like created", body = LikeResponse),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Link not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
pub async fn like_link(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    like_target(&state, &auth_user, TargetRef::new(TargetKind::Link, id)).await
}

#[instrument(skip(state, auth_user), fields(user_id = auth_user.user_id))]
async fn like_target(
    state: &AppState,
    auth_user: &AuthUser,
    target: TargetRef,
) -> Result<(StatusCode, Json<LikeResponse>), AppError> {
    let txn = state.db.begin().await?;
    let target = engagement::resolve(&txn, target).await?;
    let model = engagement::attach_like(&txn, auth_user.user_id, &target).await?;
    txn.commit().await?;

    tracing::info!(
        like_id = model.id,
        target = %target.kind(),
        target_id = target.id(),
        "Like created"
    );
    Ok((StatusCode::CREATED, Json(LikeResponse::from(model))))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Likes",
    operation_id = "deleteLike",
    summary = "Remove a like",
    description = "Only the user who created the like may remove it.",
    params(("id" = i32, Path, description = "Like ID")),
    responses(
        (status = 204, description = "Like removed"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Like belongs to another user (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Like not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id, user_id = auth_user.user_id))]
pub async fn delete_like(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let model = like::Entity::find_by_id(id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Like not found".into()))?;

    auth_user.require_owner(model.user_id)?;

    like::Entity::delete_by_id(id).exec(&state.db).await?;
    tracing::info!("Like removed");

    Ok(StatusCode::NO_CONTENT)
}
