use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::LikeToggle;
use crate::post::application::ports::outgoing::{LikeRepositoryError, PostRepositoryError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ToggleLikeError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<LikeRepositoryError> for ToggleLikeError {
    fn from(err: LikeRepositoryError) -> Self {
        ToggleLikeError::RepositoryError(err.to_string())
    }
}

impl From<PostRepositoryError> for ToggleLikeError {
    fn from(err: PostRepositoryError) -> Self {
        match err {
            PostRepositoryError::NotFound => ToggleLikeError::PostNotFound,
            PostRepositoryError::DatabaseError(msg) => ToggleLikeError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait ToggleLikeUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, post_id: Uuid) -> Result<LikeToggle, ToggleLikeError>;
}
