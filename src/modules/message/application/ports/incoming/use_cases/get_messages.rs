use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::message::application::domain::MessageView;
use crate::message::application::ports::outgoing::MessageQueryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetMessagesError {
    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<MessageQueryError> for GetMessagesError {
    fn from(err: MessageQueryError) -> Self {
        GetMessagesError::QueryError(err.to_string())
    }
}

#[async_trait]
pub trait GetMessagesUseCase: Send + Sync {
    async fn execute(
        &self,
        user: UserId,
        with: Option<UserId>,
    ) -> Result<Vec<MessageView>, GetMessagesError>;
}
