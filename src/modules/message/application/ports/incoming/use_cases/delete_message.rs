use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::message::application::ports::outgoing::MessageRepositoryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteMessageError {
    #[error("Message not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<MessageRepositoryError> for DeleteMessageError {
    fn from(err: MessageRepositoryError) -> Self {
        match err {
            MessageRepositoryError::NotFound => DeleteMessageError::NotFound,
            MessageRepositoryError::DatabaseError(msg) => DeleteMessageError::RepositoryError(msg),
        }
    }
}

/// Either participant may delete.
#[async_trait]
pub trait DeleteMessageUseCase: Send + Sync {
    async fn execute(&self, user: UserId, message_id: Uuid) -> Result<(), DeleteMessageError>;
}
