use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::PostView;
use crate::post::application::ports::outgoing::PostQueryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetSinglePostError {
    #[error("Post not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<PostQueryError> for GetSinglePostError {
    fn from(err: PostQueryError) -> Self {
        GetSinglePostError::QueryError(err.to_string())
    }
}

#[async_trait]
pub trait GetSinglePostUseCase: Send + Sync {
    async fn execute(&self, viewer: UserId, post_id: Uuid)
        -> Result<PostView, GetSinglePostError>;
}
