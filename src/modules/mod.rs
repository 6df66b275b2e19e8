pub mod auth;
pub mod comment;
pub mod media;
pub mod message;
pub mod post;
pub mod seed;
