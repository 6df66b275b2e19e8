use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{UserId, UserSummary},
    ports::outgoing::{UserQuery, UserQueryError},
    use_cases::search_users::{SearchUsersUseCase, SEARCH_RESULT_LIMIT},
};

pub struct SearchUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    user_query: Q,
}

impl<Q> SearchUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { user_query: query }
    }
}

#[async_trait]
impl<Q> SearchUsersUseCase for SearchUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        caller: UserId,
        term: &str,
    ) -> Result<Vec<UserSummary>, UserQueryError> {
        self.user_query
            .search(term.trim(), caller, SEARCH_RESULT_LIMIT)
            .await
    }
}
