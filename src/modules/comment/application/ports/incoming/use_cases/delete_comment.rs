use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::ports::outgoing::CommentRepositoryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteCommentError {
    #[error("Comment not found")]
    NotFound,

    #[error("Not your comment.")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CommentRepositoryError> for DeleteCommentError {
    fn from(err: CommentRepositoryError) -> Self {
        match err {
            CommentRepositoryError::NotFound => DeleteCommentError::NotFound,
            CommentRepositoryError::DatabaseError(msg) => DeleteCommentError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait DeleteCommentUseCase: Send + Sync {
    async fn execute(&self, requester: UserId, comment_id: Uuid)
        -> Result<(), DeleteCommentError>;
}
