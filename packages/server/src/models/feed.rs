use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize, utoipa::ToSchema)]
pub struct StatusFeedItem {
    pub id: i32,
    pub content: String,
    pub user_id: i32,
    pub author_email: String,
    pub comment_count: u64,
    pub like_count: u64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct LinkFeedItem {
    pub id: i32,
    pub url: String,
    pub title: String,
    pub user_id: i32,
    pub author_email: String,
    pub comment_count: u64,
    pub like_count: u64,
    pub created_at: DateTime<Utc>,
}

/// Home page: every status and every link, each list newest first.
#[derive(Serialize, utoipa::ToSchema)]
pub struct FeedResponse {
    pub statuses: Vec<StatusFeedItem>,
    pub links: Vec<LinkFeedItem>,
}
