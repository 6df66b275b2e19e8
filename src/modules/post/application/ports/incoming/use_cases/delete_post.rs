use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::ports::outgoing::PostRepositoryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeletePostError {
    #[error("Post not found")]
    NotFound,

    #[error("Not your post.")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PostRepositoryError> for DeletePostError {
    fn from(err: PostRepositoryError) -> Self {
        match err {
            PostRepositoryError::NotFound => DeletePostError::NotFound,
            PostRepositoryError::DatabaseError(msg) => DeletePostError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait DeletePostUseCase: Send + Sync {
    async fn execute(&self, requester: UserId, post_id: Uuid) -> Result<(), DeletePostError>;
}
