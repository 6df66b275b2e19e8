use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::{
    domain::{
        entities::{AuthSession, UserProfile},
        validation::{validate_email, validate_password, validate_username, FieldError},
    },
    ports::outgoing::{
        NewUser, PasswordHasher, TokenProvider, UserQuery, UserRepository, UserRepositoryError,
    },
};

// ========================= Register Command =========================
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    username: String,
    email: String,
    first_name: String,
    last_name: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterCommandError {
    #[error(transparent)]
    InvalidField(#[from] FieldError),

    #[error("Passwords do not match.")]
    PasswordMismatch,
}

impl RegisterUserCommand {
    pub fn new(
        username: String,
        email: String,
        first_name: String,
        last_name: String,
        password: String,
        password2: String,
    ) -> Result<Self, RegisterCommandError> {
        let username = validate_username(&username)?;
        let email = validate_email(&email)?;
        validate_password(&password)?;

        if password != password2 {
            return Err(RegisterCommandError::PasswordMismatch);
        }

        Ok(Self {
            username,
            email,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

// ========================= Register Error =========================
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegisterUserError {
    #[error("A user with that username already exists.")]
    UsernameTaken,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ========================= Use Case =========================
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand)
        -> Result<AuthSession, RegisterUserError>;
}

#[derive(Clone)]
pub struct RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q, R> RegisterUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterUserUseCase for RegisterUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RegisterUserCommand,
    ) -> Result<AuthSession, RegisterUserError> {
        let existing = self
            .query
            .find_by_username(&command.username)
            .await
            .map_err(|e| RegisterUserError::RepositoryError(e.to_string()))?;

        if existing.is_some() {
            return Err(RegisterUserError::UsernameTaken);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&command.password)
            .await
            .map_err(|e| RegisterUserError::HashingFailed(e.to_string()))?;

        let user = self
            .repository
            .create_user(NewUser {
                username: command.username,
                email: command.email,
                first_name: command.first_name,
                last_name: command.last_name,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UsernameTaken => RegisterUserError::UsernameTaken,
                other => RegisterUserError::RepositoryError(other.to_string()),
            })?;

        let tokens = self
            .token_provider
            .issue_pair(user.id)
            .map_err(|e| RegisterUserError::TokenGenerationFailed(e.to_string()))?;

        Ok(AuthSession {
            user: UserProfile::from_user(&user, 0),
            access: tokens.access,
            refresh: tokens.refresh,
        })
    }
}
