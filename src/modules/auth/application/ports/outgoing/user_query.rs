use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId, UserSummary};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read side of the user store.
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;

    async fn list_users(&self) -> Result<Vec<User>, UserQueryError>;

    /// Case-insensitive substring match on username, first and last name.
    async fn search(
        &self,
        term: &str,
        exclude: UserId,
        limit: u64,
    ) -> Result<Vec<UserSummary>, UserQueryError>;

    async fn find_summaries(&self, ids: &[UserId]) -> Result<Vec<UserSummary>, UserQueryError>;

    async fn count_friends(&self, user_id: UserId) -> Result<u64, UserQueryError>;
}
