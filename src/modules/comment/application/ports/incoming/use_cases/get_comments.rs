use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::CommentView;
use crate::comment::application::ports::outgoing::CommentQueryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetCommentsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<CommentQueryError> for GetCommentsError {
    fn from(err: CommentQueryError) -> Self {
        GetCommentsError::QueryError(err.to_string())
    }
}

#[async_trait]
pub trait GetCommentsUseCase: Send + Sync {
    async fn execute(&self, post_id: Option<Uuid>) -> Result<Vec<CommentView>, GetCommentsError>;
}
