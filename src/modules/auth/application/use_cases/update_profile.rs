use async_trait::async_trait;

use crate::auth::application::{
    domain::{
        entities::{UserId, UserProfile},
        validation::{validate_email, validate_password, validate_username, FieldError},
    },
    ports::outgoing::{UserQueryError, UserRepositoryError},
};
use crate::media::application::domain::ImageUpload;

/// Validated partial profile update; absent fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateUserInput {
    pub user_id: UserId,
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<ImageUpload>,
}

impl UpdateUserInput {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: UserId,
        username: Option<String>,
        email: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
        bio: Option<String>,
        password: Option<String>,
        avatar: Option<ImageUpload>,
    ) -> Result<Self, FieldError> {
        let username = username.as_deref().map(validate_username).transpose()?;
        let email = email.as_deref().map(validate_email).transpose()?;
        if let Some(password) = password.as_deref() {
            validate_password(password)?;
        }

        Ok(Self {
            user_id,
            username,
            email,
            first_name: first_name.map(|v| v.trim().to_string()),
            last_name: last_name.map(|v| v.trim().to_string()),
            bio,
            password,
            avatar,
        })
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum UpdateUserError {
    #[error("A user with that username already exists.")]
    UsernameTaken,

    #[error("User not found")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Avatar upload failed: {0}")]
    StorageFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Query error: {0}")]
    QueryError(#[from] UserQueryError),
}

impl From<UserRepositoryError> for UpdateUserError {
    fn from(error: UserRepositoryError) -> Self {
        match error {
            UserRepositoryError::UsernameTaken => UpdateUserError::UsernameTaken,
            UserRepositoryError::UserNotFound => UpdateUserError::UserNotFound,
            UserRepositoryError::DatabaseError(msg) => UpdateUserError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait UpdateUserProfileUseCase: Send + Sync {
    async fn execute(&self, data: UpdateUserInput) -> Result<UserProfile, UpdateUserError>;
}
