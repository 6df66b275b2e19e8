use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::CommentView;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommentQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentQuery: Send + Sync {
    /// Comments oldest first, optionally restricted to one post.
    async fn list(&self, post_id: Option<Uuid>) -> Result<Vec<CommentView>, CommentQueryError>;

    async fn find(&self, comment_id: Uuid) -> Result<Option<CommentView>, CommentQueryError>;
}
