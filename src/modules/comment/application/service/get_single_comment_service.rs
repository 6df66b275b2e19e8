use async_trait::async_trait;
use uuid::Uuid;

use crate::comment::application::domain::CommentView;
use crate::comment::application::ports::incoming::use_cases::{
    GetSingleCommentError, GetSingleCommentUseCase,
};
use crate::comment::application::ports::outgoing::CommentQuery;

pub struct GetSingleCommentService<Q>
where
    Q: CommentQuery,
{
    query: Q,
}

impl<Q> GetSingleCommentService<Q>
where
    Q: CommentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleCommentUseCase for GetSingleCommentService<Q>
where
    Q: CommentQuery + Send + Sync,
{
    async fn execute(&self, comment_id: Uuid) -> Result<CommentView, GetSingleCommentError> {
        self.query
            .find(comment_id)
            .await?
            .ok_or(GetSingleCommentError::NotFound)
    }
}
