use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LikeRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn exists(&self, user_id: UserId, post_id: Uuid) -> Result<bool, LikeRepositoryError>;

    /// Idempotent: an existing like for the pair is left as is.
    async fn add(&self, user_id: UserId, post_id: Uuid) -> Result<(), LikeRepositoryError>;

    async fn remove(&self, user_id: UserId, post_id: Uuid) -> Result<(), LikeRepositoryError>;

    async fn count(&self, post_id: Uuid) -> Result<u64, LikeRepositoryError>;
}
