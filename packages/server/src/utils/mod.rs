pub mod content;
pub mod hash;
pub mod jwt;
