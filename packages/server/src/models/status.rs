use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::engagement::{CommentResponse, LikeResponse};
use super::shared::FieldErrors;
use crate::entity::status;
use crate::error::AppError;

/// Request body for posting a status. `GET /statuses/new` returns an empty one.
#[derive(Deserialize, Serialize, Default, utoipa::ToSchema)]
pub struct CreateStatusRequest {
    /// Status text.
    #[schema(example = "Test status with some content")]
    #[serde(default)]
    pub content: String,
}

pub fn validate_create_status(payload: &CreateStatusRequest) -> Result<(), AppError> {
    let mut errors = FieldErrors::new();
    errors.require_present("Content", &payload.content);
    errors.into_result()
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct StatusResponse {
    pub id: i32,
    pub content: String,
    /// Author's user id.
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<status::Model> for StatusResponse {
    fn from(m: status::Model) -> Self {
        Self {
            id: m.id,
            content: m.content,
            user_id: m.user_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// A status with its author and engagements.
#[derive(Serialize, utoipa::ToSchema)]
pub struct StatusDetailResponse {
    pub id: i32,
    pub content: String,
    pub user_id: i32,
    pub author_email: String,
    pub comments: Vec<CommentResponse>,
    pub likes: Vec<LikeResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
