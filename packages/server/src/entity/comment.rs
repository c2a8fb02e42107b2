use common::TargetKind;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A comment on a status or link. The target is a polymorphic reference
/// (`commentable_type`, `commentable_id`) and carries no foreign key.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "comment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    pub commentable_type: TargetKind,
    pub commentable_id: i32,

    pub user_id: i32,
    #[sea_orm(belongs_to, from = "user_id", to = "id")]
    pub user: HasOne<super::user::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
