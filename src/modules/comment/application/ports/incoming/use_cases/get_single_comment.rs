use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::CommentView;
use crate::comment::application::ports::outgoing::CommentQueryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetSingleCommentError {
    #[error("Comment not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<CommentQueryError> for GetSingleCommentError {
    fn from(err: CommentQueryError) -> Self {
        GetSingleCommentError::QueryError(err.to_string())
    }
}

#[async_trait]
pub trait GetSingleCommentUseCase: Send + Sync {
    async fn execute(&self, comment_id: Uuid) -> Result<CommentView, GetSingleCommentError>;
}
