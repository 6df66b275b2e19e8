use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::UserProfile,
    ports::outgoing::{UserQuery, UserQueryError},
    use_cases::list_users::ListUsersUseCase,
};

pub struct ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    user_query: Q,
}

impl<Q> ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { user_query: query }
    }
}

#[async_trait]
impl<Q> ListUsersUseCase for ListUsersService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<UserProfile>, UserQueryError> {
        let users = self.user_query.list_users().await?;

        let mut profiles = Vec::with_capacity(users.len());
        for user in &users {
            let friends_count = self.user_query.count_friends(user.user_id()).await?;
            profiles.push(UserProfile::from_user(user, friends_count));
        }

        Ok(profiles)
    }
}
