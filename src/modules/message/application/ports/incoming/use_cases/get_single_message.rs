use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::message::application::domain::MessageView;
use crate::message::application::ports::outgoing::MessageQueryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetSingleMessageError {
    /// Also returned when the caller is not a participant.
    #[error("Message not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<MessageQueryError> for GetSingleMessageError {
    fn from(err: MessageQueryError) -> Self {
        GetSingleMessageError::QueryError(err.to_string())
    }
}

#[async_trait]
pub trait GetSingleMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        user: UserId,
        message_id: Uuid,
    ) -> Result<MessageView, GetSingleMessageError>;
}
