use async_trait::async_trait;

use crate::auth::application::ports::outgoing::UserQuery;
use crate::message::application::domain::MessageView;
use crate::message::application::ports::incoming::use_cases::{
    SendMessageCommand, SendMessageError, SendMessageUseCase,
};
use crate::message::application::ports::outgoing::{MessageQuery, MessageRepository, NewMessage};

pub struct SendMessageService<R, Q, U>
where
    R: MessageRepository,
    Q: MessageQuery,
    U: UserQuery,
{
    repository: R,
    query: Q,
    users: U,
}

impl<R, Q, U> SendMessageService<R, Q, U>
where
    R: MessageRepository,
    Q: MessageQuery,
    U: UserQuery,
{
    pub fn new(repository: R, query: Q, users: U) -> Self {
        Self {
            repository,
            query,
            users,
        }
    }
}

#[async_trait]
impl<R, Q, U> SendMessageUseCase for SendMessageService<R, Q, U>
where
    R: MessageRepository + Send + Sync,
    Q: MessageQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, command: SendMessageCommand) -> Result<MessageView, SendMessageError> {
        if self.users.find_by_id(command.receiver()).await?.is_none() {
            return Err(SendMessageError::ReceiverNotFound);
        }

        let message = self
            .repository
            .create(NewMessage {
                sender_id: command.sender(),
                receiver_id: command.receiver(),
                content: command.content().to_string(),
            })
            .await?;

        self.query.find(message.id).await?.ok_or_else(|| {
            SendMessageError::RepositoryError(format!("message {} vanished after insert", message.id))
        })
    }
}
