pub mod auth;
pub mod comment;
pub mod home;
pub mod like;
pub mod link;
pub mod status;
