//! Comments and likes attach to either a status or a link through a
//! polymorphic `(type, id)` pair. Everything that reads or writes those
//! columns goes through this module.

use std::collections::HashMap;

use chrono::Utc;
use common::TargetKind;
use sea_orm::sea_query::LockType;
use sea_orm::*;
use serde_json::Value;

use crate::entity::{comment, like, link, status};
use crate::error::AppError;
use crate::models::engagement::CreateLikeRequest;

/// Unresolved reference to a content item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetRef {
    pub kind: TargetKind,
    pub id: i32,
}

impl TargetRef {
    pub fn new(kind: TargetKind, id: i32) -> Self {
        Self { kind, id }
    }
}

/// A content item that is known to exist.
#[derive(Clone, Debug)]
pub enum Target {
    Status(status::Model),
    Link(link::Model),
}

impl Target {
    pub fn kind(&self) -> TargetKind {
        match self {
            Target::Status(_) => TargetKind::Status,
            Target::Link(_) => TargetKind::Link,
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            Target::Status(s) => s.id,
            Target::Link(l) => l.id,
        }
    }

    pub fn author_id(&self) -> i32 {
        match self {
            Target::Status(s) => s.user_id,
            Target::Link(l) => l.user_id,
        }
    }

    pub fn target_ref(&self) -> TargetRef {
        TargetRef::new(self.kind(), self.id())
    }
}

fn not_found(kind: TargetKind) -> AppError {
    AppError::NotFound(format!("{} not found", kind.type_name()))
}

/// Mirrors "blank" parameter semantics: null, empty or whitespace strings,
/// `false` and empty collections count as absent.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Bool(true) | Value::Number(_) => true,
    }
}

fn parse_id(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Pick the target of a polymorphic like request.
///
/// Candidates are scanned in `TargetKind::ALL` order and the first kind whose
/// id parameter is present wins, so a request carrying both `status_id` and
/// `link_id` targets the status. A present id that is not an integer cannot
/// name any row and is reported as not found.
pub fn select_target(params: &CreateLikeRequest) -> Result<TargetRef, AppError> {
    let (kind, raw) = TargetKind::ALL
        .iter()
        .find_map(|&kind| {
            params
                .id_for(kind)
                .filter(|v| is_present(v))
                .map(|v| (kind, v))
        })
        .ok_or_else(|| {
            let names: Vec<&str> = TargetKind::ALL.iter().map(|k| k.id_param()).collect();
            AppError::Validation(format!("{} is required", names.join(" or ")))
        })?;

    let id = parse_id(raw).ok_or_else(|| not_found(kind))?;
    Ok(TargetRef::new(kind, id))
}

async fn load<C: ConnectionTrait>(
    db: &C,
    target: TargetRef,
    lock: LockType,
) -> Result<Target, AppError> {
    let found = match target.kind {
        TargetKind::Status => status::Entity::find_by_id(target.id)
            .lock(lock)
            .one(db)
            .await?
            .map(Target::Status),
        TargetKind::Link => link::Entity::find_by_id(target.id)
            .lock(lock)
            .one(db)
            .await?
            .map(Target::Link),
    };
    found.ok_or_else(|| not_found(target.kind))
}

/// Load the content item a reference points at with `FOR SHARE`.
///
/// Call inside the transaction that attaches the engagement, so a concurrent
/// delete either waits for the insert to commit or hides the row.
pub async fn resolve<C: ConnectionTrait>(db: &C, target: TargetRef) -> Result<Target, AppError> {
    load(db, target, LockType::Share).await
}

/// Load the content item with `FOR UPDATE`, ahead of deleting it.
pub async fn resolve_for_delete<C: ConnectionTrait>(
    db: &C,
    target: TargetRef,
) -> Result<Target, AppError> {
    load(db, target, LockType::Update).await
}

/// Comments on a target, oldest first.
pub async fn comments_on<C: ConnectionTrait>(
    db: &C,
    target: TargetRef,
) -> Result<Vec<comment::Model>, DbErr> {
    comment::Entity::find()
        .filter(comment::Column::CommentableType.eq(target.kind))
        .filter(comment::Column::CommentableId.eq(target.id))
        .order_by_asc(comment::Column::CreatedAt)
        .order_by_asc(comment::Column::Id)
        .all(db)
        .await
}

/// Likes on a target, oldest first.
pub async fn likes_on<C: ConnectionTrait>(
    db: &C,
    target: TargetRef,
) -> Result<Vec<like::Model>, DbErr> {
    like::Entity::find()
        .filter(like::Column::LikeableType.eq(target.kind))
        .filter(like::Column::LikeableId.eq(target.id))
        .order_by_asc(like::Column::CreatedAt)
        .order_by_asc(like::Column::Id)
        .all(db)
        .await
}

pub async fn attach_comment<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    target: &Target,
    content: String,
) -> Result<comment::Model, DbErr> {
    comment::ActiveModel {
        content: Set(content),
        commentable_type: Set(target.kind()),
        commentable_id: Set(target.id()),
        user_id: Set(user_id),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Likes are not deduplicated per (user, target).
pub async fn attach_like<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    target: &Target,
) -> Result<like::Model, DbErr> {
    like::ActiveModel {
        likeable_type: Set(target.kind()),
        likeable_id: Set(target.id()),
        user_id: Set(user_id),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Comment and like counts per target id, for one kind.
#[derive(Debug, Default)]
pub struct EngagementCounts {
    comments: HashMap<i32, u64>,
    likes: HashMap<i32, u64>,
}

impl EngagementCounts {
    pub fn comments(&self, id: i32) -> u64 {
        self.comments.get(&id).copied().unwrap_or(0)
    }

    pub fn likes(&self, id: i32) -> u64 {
        self.likes.get(&id).copied().unwrap_or(0)
    }
}

fn tally(ids: Vec<i32>) -> HashMap<i32, u64> {
    let mut counts = HashMap::new();
    for id in ids {
        *counts.entry(id).or_insert(0) += 1;
    }
    counts
}

pub async fn count_by_target<C: ConnectionTrait>(
    db: &C,
    kind: TargetKind,
    ids: &[i32],
) -> Result<EngagementCounts, DbErr> {
    if ids.is_empty() {
        return Ok(EngagementCounts::default());
    }

    let commented: Vec<i32> = comment::Entity::find()
        .select_only()
        .column(comment::Column::CommentableId)
        .filter(comment::Column::CommentableType.eq(kind))
        .filter(comment::Column::CommentableId.is_in(ids.iter().copied()))
        .into_tuple()
        .all(db)
        .await?;

    let liked: Vec<i32> = like::Entity::find()
        .select_only()
        .column(like::Column::LikeableId)
        .filter(like::Column::LikeableType.eq(kind))
        .filter(like::Column::LikeableId.is_in(ids.iter().copied()))
        .into_tuple()
        .all(db)
        .await?;

    Ok(EngagementCounts {
        comments: tally(commented),
        likes: tally(liked),
    })
}

/// Delete every comment and like attached to the given targets. Returns the
/// number of rows removed.
pub async fn purge_engagements<C: ConnectionTrait>(
    db: &C,
    kind: TargetKind,
    ids: &[i32],
) -> Result<u64, DbErr> {
    if ids.is_empty() {
        return Ok(0);
    }

    let comments = comment::Entity::delete_many()
        .filter(comment::Column::CommentableType.eq(kind))
        .filter(comment::Column::CommentableId.is_in(ids.iter().copied()))
        .exec(db)
        .await?;

    let likes = like::Entity::delete_many()
        .filter(like::Column::LikeableType.eq(kind))
        .filter(like::Column::LikeableId.is_in(ids.iter().copied()))
        .exec(db)
        .await?;

    Ok(comments.rows_affected + likes.rows_affected)
}
