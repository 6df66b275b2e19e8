pub mod entities;

pub use entities::{LikeToggle, Post, PostValidationError, PostView, POST_IMAGE_FOLDER};
