use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::TargetKind;
use sea_orm::*;
use tracing::instrument;

use crate::engagement::{self, TargetRef};
use crate::entity::link;
use crate::error::{AppError, ErrorBody};
use crate::extractors::auth::AuthUser;
use crate::extractors::json::AppJson;
use crate::models::link::*;
use crate::state::AppState;
use crate::utils::content::{author_email, find_link};

#[utoipa::path(
    get,
    path = "/new",
    tag = "Links",
    operation_id = "newLink",
    summary = "Empty link draft",
    description = "Returns the payload shape `POST /links` expects, with empty fields.",
    responses(
        (status = 200, description = "Empty draft", body = CreateLinkRequest),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
pub async fn new_link(_auth_user: AuthUser) -> Json<CreateLinkRequest> {
    Json(CreateLinkRequest::default())
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Links",
    operation_id = "createLink",
    summary = "Share a link",
    description = "`url` must start with `http` and `title` must not be blank. Every failed rule is reported, joined with `, `.",
    request_body = CreateLinkRequest,
    responses(
        (status = 201, description = "Link created", body = LinkResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user, payload), fields(user_id = auth_user.user_id))]
pub async fn create_link(
    auth_user: AuthUser,
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateLinkRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_link(&payload)?;

    let now = chrono::Utc::now();
    let new_link = link::ActiveModel {
        url: Set(payload.url.trim().to_string()),
        title: Set(payload.title.trim().to_string()),
        user_id: Set(auth_user.user_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let model = new_link.insert(&state.db).await?;
    tracing::info!(link_id = model.id, "Link created");

    Ok((StatusCode::CREATED, Json(LinkResponse::from(model))))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Links",
    operation_id = "getLink",
    summary = "Get a link with its comments and likes",
    params(("id" = i32, Path, description = "Link ID")),
    responses(
        (status = 200, description = "Link details", body = LinkDetailResponse),
        (status = 404, description = "Link not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_link(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<LinkDetailResponse>, AppError> {
    let model = find_link(&state.db, id).await?;
    let target = TargetRef::new(TargetKind::Link, model.id);

    let author_email = author_email(&state.db, model.user_id).await?;
    let comments = engagement::comments_on(&state.db, target).await?;
    let likes = engagement::likes_on(&state.db, target).await?;

    Ok(Json(LinkDetailResponse {
        id: model.id,
        url: model.url,
        title: model.title,
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
    tag = "Links",
    operation_id = "deleteLink",
    summary = "Delete a link",
    description = "Deletes the link and every comment and like on it. Only the author may delete.",
    params(("id" = i32, Path, description = "Link ID")),
    responses(
        (status = 204, description = "Link deleted"),
        (status = 401, description = "Unauthorized (TOKEN_MISSING, TOKEN_INVALID)", body = ErrorBody),
        (status = 403, description = "Not the author (PERMISSION_DENIED)", body = ErrorBody),
        (status = 404, description = "Link not found (NOT_FOUND)", body = ErrorBody),
    ),
    security(("jwt" = [])),
)]
#[instrument(skip(state, auth_user), fields(id, user_id = auth_user.user_id))]
pub async fn delete_link(
    auth_user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;

    let target =
        engagement::resolve_for_delete(&txn, TargetRef::new(TargetKind::Link, id)).await?;
    auth_user.require_owner(target.author_id())?;

    let removed = engagement::purge_engagements(&txn, target.kind(), &[target.id()]).await?;
    link::Entity::delete_by_id(target.id()).exec(&txn).await?;

    txn.commit().await?;
    tracing::info!(engagements = removed, "Link deleted");

    Ok(StatusCode::NO_CONTENT)
}
