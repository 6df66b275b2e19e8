use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::user_query::UserQueryError;
use crate::message::application::domain::{
    validate_message_content, MessageValidationError, MessageView,
};
use crate::message::application::ports::outgoing::{MessageQueryError, MessageRepositoryError};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    sender: UserId,
    receiver: UserId,
    content: String,
}

impl SendMessageCommand {
    pub fn new(
        sender: UserId,
        receiver: UserId,
        content: &str,
    ) -> Result<Self, MessageValidationError> {
        Ok(Self {
            sender,
            receiver,
            content: validate_message_content(content)?,
        })
    }

    pub fn sender(&self) -> UserId {
        self.sender
    }

    pub fn receiver(&self) -> UserId {
        self.receiver
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SendMessageError {
    #[error("Invalid pk - object does not exist.")]
    ReceiverNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<MessageRepositoryError> for SendMessageError {
    fn from(err: MessageRepositoryError) -> Self {
        SendMessageError::RepositoryError(err.to_string())
    }
}

impl From<MessageQueryError> for SendMessageError {
    fn from(err: MessageQueryError) -> Self {
        SendMessageError::RepositoryError(err.to_string())
    }
}

impl From<UserQueryError> for SendMessageError {
    fn from(err: UserQueryError) -> Self {
        SendMessageError::RepositoryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SendMessageUseCase: Send + Sync {
    async fn execute(&self, command: SendMessageCommand) -> Result<MessageView, SendMessageError>;
}
