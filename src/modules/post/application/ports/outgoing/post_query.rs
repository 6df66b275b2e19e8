use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::PostView;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PostQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side assembling [`PostView`]s for a viewer.
#[async_trait]
pub trait PostQuery: Send + Sync {
    /// Newest first; `author` restricts to one user's posts.
    async fn list(
        &self,
        viewer: UserId,
        author: Option<UserId>,
    ) -> Result<Vec<PostView>, PostQueryError>;

    async fn find(&self, viewer: UserId, post_id: Uuid)
        -> Result<Option<PostView>, PostQueryError>;
}
