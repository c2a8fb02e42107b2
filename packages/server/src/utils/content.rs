use std::collections::HashMap;

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QuerySelect};

use crate::entity::{link, status, user};
use crate::error::AppError;

/// Look up a status by ID, returning 404 if not found.
pub async fn find_status<C: ConnectionTrait>(db: &C, id: i32) -> Result<status::Model, AppError> {
    status::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Status not found".into()))
}

/// Look up a link by ID, returning 404 if not found.
pub async fn find_link<C: ConnectionTrait>(db: &C, id: i32) -> Result<link::Model, AppError> {
    link::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Link not found".into()))
}

/// Map author ids to emails in one query.
pub async fn author_emails<C: ConnectionTrait>(
    db: &C,
    user_ids: impl IntoIterator<Item = i32>,
) -> Result<HashMap<i32, String>, AppError> {
    let mut ids: Vec<i32> = user_ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows: Vec<(i32, String)> = user::Entity::find()
        .select_only()
        .column(user::Column::Id)
        .column(user::Column::Email)
        .filter(user::Column::Id.is_in(ids))
        .into_tuple()
        .all(db)
        .await?;

    Ok(rows.into_iter().collect())
}

/// Email of a single author; a dangling author id is an internal error.
pub async fn author_email<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<String, AppError> {
    user::Entity::find_by_id(user_id)
        .one(db)
        .await?
        .map(|u| u.email)
        .ok_or_else(|| AppError::Internal(format!("author {user_id} is missing")))
}
