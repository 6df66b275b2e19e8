use async_trait::async_trait;

use crate::auth::application::domain::entities::{UserId, UserSummary};
use crate::auth::application::ports::outgoing::user_query::UserQueryError;
use crate::message::application::ports::outgoing::MessageQueryError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetConversationsError {
    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<MessageQueryError> for GetConversationsError {
    fn from(err: MessageQueryError) -> Self {
        GetConversationsError::QueryError(err.to_string())
    }
}

impl From<UserQueryError> for GetConversationsError {
    fn from(err: UserQueryError) -> Self {
        GetConversationsError::QueryError(err.to_string())
    }
}

/// Users the caller has exchanged at least one message with.
#[async_trait]
pub trait GetConversationsUseCase: Send + Sync {
    async fn execute(&self, user: UserId) -> Result<Vec<UserSummary>, GetConversationsError>;
}
