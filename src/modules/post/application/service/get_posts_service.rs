use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::PostView;
use crate::post::application::ports::incoming::use_cases::{
    GetFeedUseCase, GetPostsError, GetPostsUseCase,
};
use crate::post::application::ports::outgoing::PostQuery;

pub struct GetPostsService<Q>
where
    Q: PostQuery,
{
    query: Q,
}

impl<Q> GetPostsService<Q>
where
    Q: PostQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetPostsUseCase for GetPostsService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        viewer: UserId,
        author: Option<UserId>,
    ) -> Result<Vec<PostView>, GetPostsError> {
        Ok(self.query.list(viewer, author).await?)
    }
}

pub struct GetFeedService<Q>
where
    Q: PostQuery,
{
    query: Q,
}

impl<Q> GetFeedService<Q>
where
    Q: PostQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetFeedUseCase for GetFeedService<Q>
where
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, viewer: UserId) -> Result<Vec<PostView>, GetPostsError> {
        Ok(self.query.list(viewer, None).await?)
    }
}
