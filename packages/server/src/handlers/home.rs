use axum::Json;
use axum::extract::State;
use common::TargetKind;
use sea_orm::*;
use tracing::instrument;

use crate::engagement;
use crate::entity::{link, status};
use crate::error::AppError;
use crate::models::feed::{FeedResponse, LinkFeedItem, StatusFeedItem};
use crate::state::AppState;
use crate::utils::content::author_emails;

#[utoipa::path(
    get,
    path = "/home",
    tag = "Feed",
    operation_id = "home",
    summary = "Home feed",
    description = "Every status and every link, each list ordered newest first, with author email and engagement counts.",
    responses((status = 200, description = "Feed", body = FeedResponse)),
)]
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<FeedResponse>, AppError> {
    let statuses = status::Entity::find()
        .order_by_desc(status::Column::CreatedAt)
        .order_by_desc(status::Column::Id)
        .all(&state.db)
        .await?;
    let links = link::Entity::find()
        .order_by_desc(link::Column::CreatedAt)
        .order_by_desc(link::Column::Id)
        .all(&state.db)
        .await?;

    let authors = author_emails(
        &state.db,
        statuses
            .iter()
            .map(|s| s.user_id)
            .chain(links.iter().map(|l| l.user_id)),
    )
    .await?;

    let status_ids: Vec<i32> = statuses.iter().map(|s| s.id).collect();
    let link_ids: Vec<i32> = links.iter().map(|l| l.id).collect();
    let status_counts =
        engagement::count_by_target(&state.db, TargetKind::Status, &status_ids).await?;
    let link_counts = engagement::count_by_target(&state.db, TargetKind::Link, &link_ids).await?;

    let author_of = |user_id: i32| authors.get(&user_id).cloned().unwrap_or_default();

    let statuses = statuses
        .into_iter()
        .map(|s| StatusFeedItem {
            author_email: author_of(s.user_id),
            comment_count: status_counts.comments(s.id),
            like_count: status_counts.likes(s.id),
            id: s.id,
            content: s.content,
            user_id: s.user_id,
            created_at: s.created_at,
        })
        .collect();

    let links = links
        .into_iter()
        .map(|l| LinkFeedItem {
            author_email: author_of(l.user_id),
            comment_count: link_counts.comments(l.id),
            like_count: link_counts.likes(l.id),
            id: l.id,
            url: l.url,
            title: l.title,
            user_id: l.user_id,
            created_at: l.created_at,
        })
        .collect();

    Ok(Json(FeedResponse { statuses, links }))
}
