use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::PostView;
use crate::post::application::ports::incoming::use_cases::{
    GetSinglePostError, GetSinglePostUseCase,
};
use crate::post::application::ports::outgoing::PostQuery;

pub struct GetSinglePostService<Q>
where
    Q: PostQuery,
{
    query: Q,
}

impl<Q> GetSinglePostService<Q>
where
    Q: PostQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSinglePostUseCase for GetSinglePostService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, viewer: UserId, post_id: Uuid) -> Result<PostView, GetSinglePostError> {
        self.query
            .find(viewer, post_id)
            .await?
            .ok_or(GetSinglePostError::NotFound)
    }
}
