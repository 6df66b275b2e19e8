use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::CommentView;
use crate::comment::application::ports::incoming::use_cases::{
    GetCommentsError, GetCommentsUseCase,
};
use crate::comment::application::ports::outgoing::CommentQuery;

pub struct GetCommentsService<Q>
where
    Q: CommentQuery,
{
    query: Q,
}

impl<Q> GetCommentsService<Q>
where
    Q: CommentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetCommentsUseCase for GetCommentsService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    async fn execute(&self, post_id: Option<Uuid>) -> Result<Vec<CommentView>, GetCommentsError> {
        Ok(self.query.list(post_id).await?)
    }
}
