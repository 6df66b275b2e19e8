use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::domain::{
    validate_comment_content, CommentValidationError, CommentView,
};
use crate::comment::application::ports::outgoing::{CommentQueryError, CommentRepositoryError};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateCommentCommand {
    author: UserId,
    post_id: Uuid,
    content: String,
}

impl CreateCommentCommand {
    pub fn new(
        author: UserId,
        post_id: Uuid,
        content: &str,
    ) -> Result<Self, CommentValidationError> {
        Ok(Self {
            author,
            post_id,
            content: validate_comment_content(content)?,
        })
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn post_id(&self) -> Uuid {
        self.post_id
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateCommentError {
    #[error("Post not found")]
    PostNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<CommentRepositoryError> for CreateCommentError {
    fn from(err: CommentRepositoryError) -> Self {
        CreateCommentError::RepositoryError(err.to_string())
    }
}

impl From<CommentQueryError> for CreateCommentError {
    fn from(err: CommentQueryError) -> Self {
        CreateCommentError::RepositoryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateCommentUseCase: Send + Sync {
    async fn execute(&self, command: CreateCommentCommand)
        -> Result<CommentView, CreateCommentError>;
}
