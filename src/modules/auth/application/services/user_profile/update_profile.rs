use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::entities::UserProfile,
    ports::outgoing::{PasswordHasher, ProfileChanges, UserQuery, UserRepository},
    use_cases::update_profile::{UpdateUserError, UpdateUserInput, UpdateUserProfileUseCase},
};
use crate::media::application::ports::outgoing::MediaStore;

const AVATAR_FOLDER: &str = "avatars";

pub struct UpdateUserProfileService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    user_query: Q,
    user_repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    media_store: Arc<dyn MediaStore + Send + Sync>,
}

impl<Q, R> UpdateUserProfileService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        media_store: Arc<dyn MediaStore + Send + Sync>,
    ) -> Self {
        Self {
            user_query: query,
            user_repository: repository,
            password_hasher,
            media_store,
        }
    }
}

#[async_trait]
impl<Q, R> UpdateUserProfileUseCase for UpdateUserProfileService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, data: UpdateUserInput) -> Result<UserProfile, UpdateUserError> {
        if let Some(username) = data.username.as_deref() {
            let owner = self.user_query.find_by_username(username).await?;
            if owner.is_some_and(|u| u.id != data.user_id.value()) {
                return Err(UpdateUserError::UsernameTaken);
            }
        }

        let password_hash = match data.password.as_deref() {
            Some(password) => Some(
                self.password_hasher
                    .hash_password(password)
                    .await
                    .map_err(|e| UpdateUserError::HashingFailed(e.to_string()))?,
            ),
            None => None,
        };

        let avatar = match data.avatar {
            Some(upload) => Some(
                self.media_store
                    .save(AVATAR_FOLDER, upload)
                    .await
                    .map_err(|e| UpdateUserError::StorageFailed(e.to_string()))?,
            ),
            None => None,
        };

        let user = self
            .user_repository
            .update_profile(
                data.user_id,
                ProfileChanges {
                    username: data.username,
                    email: data.email,
                    first_name: data.first_name,
                    last_name: data.last_name,
                    bio: data.bio,
                    avatar,
                    password_hash,
                },
            )
            .await?;

        let friends_count = self.user_query.count_friends(data.user_id).await?;

        Ok(UserProfile::from_user(&user, friends_count))
    }
}
