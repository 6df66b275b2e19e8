use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::ports::incoming::use_cases::{DeletePostError, DeletePostUseCase};
use crate::post::application::ports::outgoing::PostRepository;

pub struct DeletePostService<R>
where
    R: PostRepository,
{
    repository: R,
}

impl<R> DeletePostService<R>
where
    R: PostRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeletePostUseCase for DeletePostService<R>
where
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, requester: UserId, post_id: Uuid) -> Result<(), DeletePostError> {
        let post = self
            .repository
            .find(post_id)
            .await?
            .ok_or(DeletePostError::NotFound)?;

        if !post.is_authored_by(requester) {
            return Err(DeletePostError::Forbidden);
        }

        Ok(self.repository.delete(post_id).await?)
    }
}
