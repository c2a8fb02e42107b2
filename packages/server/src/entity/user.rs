use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Stored trimmed and lowercased.
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2 PHC string.
    #[serde(skip_serializing)]
    pub password: String,

    #[sea_orm(has_many)]
    pub statuses: HasMany<super::status::Entity>,
    #[sea_orm(has_many)]
    pub links: HasMany<super::link::Entity>,
    #[sea_orm(has_many)]
    pub comments: HasMany<super::comment::Entity>,
    #[sea_orm(has_many)]
    pub likes: HasMany<super::like::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
