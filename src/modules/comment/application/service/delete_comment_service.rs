use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::ports::incoming::use_cases::{
    DeleteCommentError, DeleteCommentUseCase,
};
use crate::comment::application::ports::outgoing::CommentRepository;

pub struct DeleteCommentService<R>
where
    R: CommentRepository,
{
    repository: R,
}

impl<R> DeleteCommentService<R>
where
    R: CommentRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteCommentUseCase for DeleteCommentService<R>
where
    R: CommentRepository + Send + Sync,
{
    async fn execute(&self, requester: UserId, comment_id: Uuid) -> Result<(), DeleteCommentError> {
        let comment = self
            .repository
            .find(comment_id)
            .await?
            .ok_or(DeleteCommentError::NotFound)?;

        if comment.author_id != requester {
            return Err(DeleteCommentError::Forbidden);
        }

        Ok(self.repository.delete(comment_id).await?)
    }
}
