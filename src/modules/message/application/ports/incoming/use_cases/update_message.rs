use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::message::application::domain::{
    validate_message_content, MessageValidationError, MessageView,
};
use crate::message::application::ports::outgoing::{MessageQueryError, MessageRepositoryError};

#[derive(Debug, Clone)]
pub struct UpdateMessageCommand {
    pub editor: UserId,
    pub message_id: Uuid,
    pub content: String,
}

impl UpdateMessageCommand {
    pub fn new(
        editor: UserId,
        message_id: Uuid,
        content: &str,
    ) -> Result<Self, MessageValidationError> {
        Ok(Self {
            editor,
            message_id,
            content: validate_message_content(content)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdateMessageError {
    #[error("Message not found")]
    NotFound,

    #[error("Not your message.")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<MessageRepositoryError> for UpdateMessageError {
    fn from(err: MessageRepositoryError) -> Self {
        match err {
            MessageRepositoryError::NotFound => UpdateMessageError::NotFound,
            MessageRepositoryError::DatabaseError(msg) => UpdateMessageError::RepositoryError(msg),
        }
    }
}

impl From<MessageQueryError> for UpdateMessageError {
    fn from(err: MessageQueryError) -> Self {
        UpdateMessageError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait UpdateMessageUseCase: Send + Sync {
    async fn execute(&self, command: UpdateMessageCommand)
        -> Result<MessageView, UpdateMessageError>;
}
