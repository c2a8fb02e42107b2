#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of content item a comment or like can be attached to.
///
/// Stored in the polymorphic `*_type` columns under its type name
/// (`"Status"`, `"Link"`). On the wire it is the lowercase tag used in
/// request parameters (`status`, `link`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// A text status.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Status"))]
    Status,
    /// A shared link.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Link"))]
    Link,
}

impl TargetKind {
    /// Candidate kinds in resolution order. When a request names more than
    /// one target, the earliest kind in this list wins.
    pub const ALL: &'static [TargetKind] = &[Self::Status, Self::Link];

    /// Lowercase tag, as used in routes and request parameters.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Link => "link",
        }
    }

    /// Name of the request parameter that carries an id of this kind.
    pub fn id_param(&self) -> &'static str {
        match self {
            Self::Status => "status_id",
            Self::Link => "link_id",
        }
    }

    /// Type name stored in the polymorphic columns.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Status => "Status",
            Self::Link => "Link",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error when parsing an unknown target tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid target type '{invalid}'. Valid values: status, link")]
pub struct ParseTargetKindError {
    invalid: String,
}

impl FromStr for TargetKind {
    type Err = ParseTargetKindError;

    /// Accepts the lowercase tag or the stored type name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "status" | "Status" => Ok(Self::Status),
            "link" | "Link" => Ok(Self::Link),
            _ => Err(ParseTargetKindError {
                invalid: s.to_string(),
            }),
        }
    }
}
