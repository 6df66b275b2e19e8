use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::domain::{
    validate_comment_content, CommentValidationError, CommentView,
};
use crate::comment::application::ports::outgoing::{CommentQueryError, CommentRepositoryError};

#[derive(Debug, Clone)]
pub struct UpdateCommentCommand {
    pub editor: UserId,
    pub comment_id: Uuid,
    pub content: String,
}

impl UpdateCommentCommand {
    pub fn new(
        editor: UserId,
        comment_id: Uuid,
        content: &str,
    ) -> Result<Self, CommentValidationError> {
        Ok(Self {
            editor,
            comment_id,
            content: validate_comment_content(content)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateCommentError {
    #[error("Comment not found")]
    NotFound,

    #[error("Not your comment.")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CommentRepositoryError> for UpdateCommentError {
    fn from(err: CommentRepositoryError) -> Self {
        match err {
            CommentRepositoryError::NotFound => UpdateCommentError::NotFound,
            CommentRepositoryError::DatabaseError(msg) => UpdateCommentError::RepositoryError(msg),
        }
    }
}

impl From<CommentQueryError> for UpdateCommentError {
    fn from(err: CommentQueryError) -> Self {
        UpdateCommentError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait UpdateCommentUseCase: Send + Sync {
    async fn execute(&self, command: UpdateCommentCommand)
        -> Result<CommentView, UpdateCommentError>;
}
