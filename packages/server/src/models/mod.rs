pub mod auth;
pub mod engagement;
pub mod feed;
pub mod link;
pub mod shared;
pub mod status;
