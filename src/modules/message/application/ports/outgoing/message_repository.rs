use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::message::application::domain::Message;

#[derive(Debug, Clone)]
pub struct NewMessage {
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MessageRepositoryError {
    #[error("Message not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Inserts with `is_read = false`.
    async fn create(&self, data: NewMessage) -> Result<Message, MessageRepositoryError>;

    async fn find(&self, message_id: Uuid) -> Result<Option<Message>, MessageRepositoryError>;

    async fn update_content(
        &self,
        message_id: Uuid,
        content: String,
    ) -> Result<Message, MessageRepositoryError>;

    async fn delete(&self, message_id: Uuid) -> Result<(), MessageRepositoryError>;
}
