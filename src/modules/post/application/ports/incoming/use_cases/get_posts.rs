use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::PostView;
use crate::post::application::ports::outgoing::PostQueryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetPostsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<PostQueryError> for GetPostsError {
    fn from(err: PostQueryError) -> Self {
        GetPostsError::QueryError(err.to_string())
    }
}

#[async_trait]
pub trait GetPostsUseCase: Send + Sync {
    async fn execute(
        &self,
        viewer: UserId,
        author: Option<UserId>,
    ) -> Result<Vec<PostView>, GetPostsError>;
}
