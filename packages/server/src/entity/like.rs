use common::TargetKind;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A like on a status or link, referenced polymorphically through
/// (`likeable_type`, `likeable_id`). A user may like the same target more
/// than once.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "like")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub likeable_type: TargetKind,
    pub likeable_id: i32,

    pub user_id: i32,
    #[sea_orm(belongs_to, from = "user_id", to = "id")]
    pub user: HasOne<super::user::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
