use async_trait::async_trait;

use crate::auth::application::{
    domain::entities::{UserId, UserProfile},
    ports::outgoing::UserQuery,
    use_cases::fetch_profile::{FetchUserError, FetchUserProfileUseCase},
};

pub struct FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    user_query: Q,
}

impl<Q> FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { user_query: query }
    }
}

#[async_trait]
impl<Q> FetchUserProfileUseCase for FetchUserProfileService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<UserProfile, FetchUserError> {
        let user = self
            .user_query
            .find_by_id(user_id)
            .await?
            .ok_or(FetchUserError::UserNotFound(user_id))?;

        let friends_count = self.user_query.count_friends(user_id).await?;

        Ok(UserProfile::from_user(&user, friends_count))
    }
}
