pub mod like_repository;
pub mod post_query;
pub mod post_repository;

pub use like_repository::{LikeRepository, LikeRepositoryError};
pub use post_query::{PostQuery, PostQueryError};
pub use post_repository::{NewPost, PatchField, PostChanges, PostRepository, PostRepositoryError};
