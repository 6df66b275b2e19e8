use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{UserId, UserSummary},
    ports::outgoing::UserQueryError,
};

/// Maximum number of matches returned by a user search.
pub const SEARCH_RESULT_LIMIT: u64 = 10;

#[async_trait]
pub trait SearchUsersUseCase: Send + Sync {
    async fn execute(&self, caller: UserId, term: &str)
        -> Result<Vec<UserSummary>, UserQueryError>;
}
