use chrono::{Duration, Utc};
use sea_orm::sea_query::{Index, PostgresQueryBuilder};
use sea_orm::*;
use tracing::info;

use crate::entity::{comment, like, link, status, user};
use crate::utils::hash;

/// Demo accounts. Both use the password `password`.
const DEMO_USERS: &[&str] = &["fred@example.com", "george@example.com"];
const DEMO_PASSWORD: &str = "password";

/// (author index into `DEMO_USERS`, content, days ago)
const DEMO_STATUSES: &[(usize, &str, i64)] = &[
    (0, "Test status with some content", 1),
    (0, "Another test with different content", 3),
    (1, "A new challenger approaches with a status", 2),
    (0, "I sure do post a lot of statuses", 5),
    (1, "Second user posts things less often", 7),
    (1, "Vague and inspiring quotation or somesuch", 10),
];

/// (author index, url, title, days ago)
const DEMO_LINKS: &[(usize, &str, &str, i64)] = &[
    (0, "http://generalassemb.ly", "General Assembly", 2),
    (1, "http://guides.rubyonrails.org", "Rails Guides", 4),
    (1, "http://api.rubyonrails.org", "Rails API Documentation", 5),
    (0, "http://xkcd.com", "Nerd Joke Central", 9),
];

/// Insert demo users, statuses and links. Does nothing unless the user
/// table is empty.
pub async fn seed_demo_content(db: &DatabaseConnection) -> Result<(), DbErr> {
    if user::Entity::find().count(db).await? > 0 {
        info!("Skipping demo content: database already has users");
        return Ok(());
    }

    let txn = db.begin().await?;
    let now = Utc::now();

    let password =
        hash::hash_password(DEMO_PASSWORD).map_err(|e| DbErr::Custom(e.to_string()))?;
    let mut user_ids = Vec::with_capacity(DEMO_USERS.len());
    for &email in DEMO_USERS {
        let model = user::ActiveModel {
            email: Set(email.to_string()),
            password: Set(password.clone()),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        user_ids.push(model.id);
    }

    for &(author, content, days_ago) in DEMO_STATUSES {
        let at = now - Duration::days(days_ago);
        status::ActiveModel {
            content: Set(content.to_string()),
            user_id: Set(user_ids[author]),
            created_at: Set(at),
            updated_at: Set(at),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    for &(author, url, title, days_ago) in DEMO_LINKS {
        let at = now - Duration::days(days_ago);
        link::ActiveModel {
            url: Set(url.to_string()),
            title: Set(title.to_string()),
            user_id: Set(user_ids[author]),
            created_at: Set(at),
            updated_at: Set(at),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    info!(
        users = DEMO_USERS.len(),
        statuses = DEMO_STATUSES.len(),
        links = DEMO_LINKS.len(),
        "Seeded demo content"
    );
    Ok(())
}

/// Ensure required database indexes exist.
///
/// Schema sync only creates per-column indexes, so the composite indexes on
/// the polymorphic `(type, id)` pairs are created here on startup.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    let indexes = [
        (
            "idx_comment_commentable",
            Index::create()
                .table(comment::Entity)
                .col(comment::Column::CommentableType)
                .col(comment::Column::CommentableId)
                .to_owned(),
        ),
        (
            "idx_like_likeable",
            Index::create()
                .table(like::Entity)
                .col(like::Column::LikeableType)
                .col(like::Column::LikeableId)
                .to_owned(),
        ),
        (
            "idx_like_user",
            Index::create()
                .table(like::Entity)
                .col(like::Column::UserId)
                .to_owned(),
        ),
        (
            "idx_status_user",
            Index::create()
                .table(status::Entity)
                .col(status::Column::UserId)
                .to_owned(),
        ),
        (
            "idx_link_user",
            Index::create()
                .table(link::Entity)
                .col(link::Column::UserId)
                .to_owned(),
        ),
    ];

    for (name, mut index) in indexes {
        let stmt = index
            .if_not_exists()
            .name(name)
            .to_string(PostgresQueryBuilder);

        match db.execute_unprepared(&stmt).await {
            Ok(_) => info!("Ensured index {} exists", name),
            Err(e) => tracing::warn!("Failed to create index {}: {}", name, e),
        }
    }

    Ok(())
}
