use async_trait::async_trait;

use crate::message::application::domain::MessageView;
use crate::message::application::ports::incoming::use_cases::{
    UpdateMessageCommand, UpdateMessageError, UpdateMessageUseCase,
};
use crate::message::application::ports::outgoing::{MessageQuery, MessageRepository};

pub struct UpdateMessageService<R, Q>
where
    R: MessageRepository,
    Q: MessageQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> UpdateMessageService<R, Q>
where
    R: MessageRepository,
    Q: MessageQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> UpdateMessageUseCase for UpdateMessageService<R, Q>
where
    R: MessageRepository + Send + Sync,
    Q: MessageQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateMessageCommand,
    ) -> Result<MessageView, UpdateMessageError> {
        let message = self
            .repository
            .find(command.message_id)
            .await?
            .filter(|m| m.involves(command.editor))
            .ok_or(UpdateMessageError::NotFound)?;

        if message.sender_id != command.editor {
            return Err(UpdateMessageError::Forbidden);
        }

        self.repository
            .update_content(command.message_id, command.content)
            .await?;

        self.query
            .find(command.message_id)
            .await?
            .ok_or(UpdateMessageError::NotFound)
    }
}
