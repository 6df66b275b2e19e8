use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::domain::Comment;

#[derive(Debug, Clone)]
pub struct NewComment {
    pub author_id: UserId,
    pub post_id: Uuid,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Comment not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create(&self, data: NewComment) -> Result<Comment, CommentRepositoryError>;

    async fn find(&self, comment_id: Uuid) -> Result<Option<Comment>, CommentRepositoryError>;

    async fn update_content(
        &self,
        comment_id: Uuid,
        content: String,
    ) -> Result<Comment, CommentRepositoryError>;

    async fn delete(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError>;

    async fn post_exists(&self, post_id: Uuid) -> Result<bool, CommentRepositoryError>;
}
