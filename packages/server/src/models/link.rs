use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::engagement::{CommentResponse, LikeResponse};
use super::shared::FieldErrors;
use crate::entity::link;
use crate::error::AppError;

/// Required scheme prefix for shared urls.
pub const URL_PREFIX: &str = "http";

/// Request body for sharing a link. `GET /links/new` returns an empty one.
#[derive(Deserialize, Serialize, Default, utoipa::ToSchema)]
pub struct CreateLinkRequest {
    /// Must start with `http`.
    #[schema(example = "http://guides.rubyonrails.org")]
    #[serde(default)]
    pub url: String,
    #[schema(example = "Rails Guides")]
    #[serde(default)]
    pub title: String,
}

/// Presence of url and title first, then the url format. A blank url fails
/// both its presence and its format rule.
pub fn validate_create_link(payload: &CreateLinkRequest) -> Result<(), AppError> {
    let mut errors = FieldErrors::new();
    errors.require_present("Url", &payload.url);
    errors.require_present("Title", &payload.title);
    if !payload.url.trim().starts_with(URL_PREFIX) {
        errors.add("Url", "is invalid");
    }
    errors.into_result()
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct LinkResponse {
    pub id: i32,
    pub url: String,
    pub title: String,
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<link::Model> for LinkResponse {
    fn from(m: link::Model) -> Self {
        Self {
            id: m.id,
            url: m.url,
            title: m.title,
            user_id: m.user_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// A link with its author and engagements.
#[derive(Serialize, utoipa::ToSchema)]
pub struct LinkDetailResponse {
    pub id: i32,
    pub url: String,
    pub title: String,
    pub user_id: i32,
    pub author_email: String,
    pub comments: Vec<CommentResponse>,
    pub likes: Vec<LikeResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
