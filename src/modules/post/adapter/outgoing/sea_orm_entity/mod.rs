pub mod likes;
pub mod posts;
