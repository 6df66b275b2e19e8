use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::message::application::domain::MessageView;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MessageQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait MessageQuery: Send + Sync {
    /// Messages involving `user`, oldest first. With `with`, only the two-way
    /// conversation between `user` and that party.
    async fn list(
        &self,
        user: UserId,
        with: Option<UserId>,
    ) -> Result<Vec<MessageView>, MessageQueryError>;

    async fn find(&self, message_id: Uuid) -> Result<Option<MessageView>, MessageQueryError>;

    /// (sender, receiver) of every message involving `user`.
    async fn participant_pairs(
        &self,
        user: UserId,
    ) -> Result<Vec<(UserId, UserId)>, MessageQueryError>;
}
