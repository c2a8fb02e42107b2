pub mod comment;
pub mod like;
pub mod link;
pub mod status;
pub mod user;
