use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::TargetKind;
use sea_orm::TransactionTrait;
use tracing::instrument;

use crate::engagement::{self, TargetRef};
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::engagement::{CommentResponse, CreateCommentRequest, validate_create_comment};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/{id}/comments",
    tag = "Comments",
    operation_id = "commentOnStatus",
    summary = "Comment on a status",
    params(("id" = i32, Path, description = "Status ID")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Status not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
pub async fn create_status_comment(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    create_comment(
        &state,
        &auth_user,
        TargetRef::new(TargetKind::Status, id),
        payload,
    )
    .await
}

#[utoipa::path(
    post,
    path = "/{id}/comments",
    tag = "Comments",
    operation_id = "commentOnLink",
    summary = "Comment on a link",
    params(("id" = i32, Path, description = "Link ID")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 404, description = "Link not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
pub async fn create_link_comment(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    create_comment(
        &state,
        &auth_user,
        TargetRef::new(TargetKind::Link, id),
        payload,
    )
    .await
}

#[instrument(skip(state, auth_user, payload), fields(user_id = auth_user.user_id))]
async fn create_comment(
    state: &AppState,
    auth_user: &AuthUser,
    target: TargetRef,
    payload: CreateCommentRequest,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    validate_create_comment(&payload)?;

    let txn = state.db.begin().await?;
    let target = engagement::resolve(&txn, target).await?;
    let model =
        engagement::attach_comment(&txn, auth_user.user_id, &target, payload.content).await?;
    txn.commit().await?;

    tracing::info!(
        comment_id = model.id,
        target = %target.kind(),
        target_id = target.id(),
        "Comment created"
    );
    Ok((StatusCode::CREATED, Json(CommentResponse::from(model))))
}
