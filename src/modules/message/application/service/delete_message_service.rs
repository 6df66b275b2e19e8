use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::message::application::ports::incoming::use_cases::{
    DeleteMessageError, DeleteMessageUseCase,
};
use crate::message::application::ports::outgoing::MessageRepository;

pub struct DeleteMessageService<R>
where
    R: MessageRepository,
{
    repository: R,
}

impl<R> DeleteMessageService<R>
where
    R: MessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteMessageUseCase for DeleteMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, user: UserId, message_id: Uuid) -> Result<(), DeleteMessageError> {
        self.repository
            .find(message_id)
            .await?
            .filter(|m| m.involves(user))
            .ok_or(DeleteMessageError::NotFound)?;

        Ok(self.repository.delete(message_id).await?)
    }
}
