pub mod target_kind;

pub use target_kind::{ParseTargetKindError, TargetKind};
