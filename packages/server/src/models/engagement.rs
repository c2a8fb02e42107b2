use chrono::{DateTime, Utc};
use common::TargetKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::shared::FieldErrors;
use crate::entity::{comment, like};
use crate::error::AppError;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateCommentRequest {
    #[schema(example = "Nice one!")]
    #[serde(default)]
    pub content: String,
}

pub fn validate_create_comment(payload: &CreateCommentRequest) -> Result<(), AppError> {
    let mut errors = FieldErrors::new();
    errors.require_present("Content", &payload.content);
    errors.into_result()
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct CommentResponse {
    pub id: i32,
    pub content: String,
    pub user_id: i32,
    pub target_type: TargetKind,
    pub target_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<comment::Model> for CommentResponse {
    fn from(m: comment::Model) -> Self {
        Self {
            id: m.id,
            content: m.content,
            user_id: m.user_id,
            target_type: m.commentable_type,
            target_id: m.commentable_id,
            created_at: m.created_at,
        }
    }
}

/// Body of the polymorphic `POST /likes` endpoint. Ids may be sent as
/// numbers or numeric strings; when both are present the status wins.
#[derive(Deserialize, Default, utoipa::ToSchema)]
pub struct CreateLikeRequest {
    #[schema(value_type = Option<i32>, example = 3)]
    #[serde(default)]
    pub status_id: Option<Value>,
    #[schema(value_type = Option<i32>)]
    #[serde(default)]
    pub link_id: Option<Value>,
}

impl CreateLikeRequest {
    /// Raw id parameter for a candidate kind.
    pub fn id_for(&self, kind: TargetKind) -> Option<&Value> {
        match kind {
            TargetKind::Status => self.status_id.as_ref(),
            TargetKind::Link => self.link_id.as_ref(),
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct LikeResponse {
    pub id: i32,
    pub user_id: i32,
    pub target_type: TargetKind,
    pub target_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<like::Model> for LikeResponse {
    fn from(m: like::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            target_type: m.likeable_type,
            target_id: m.likeable_id,
            created_at: m.created_at,
        }
    }
}
