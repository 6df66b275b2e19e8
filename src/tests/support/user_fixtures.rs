use async_trait::async_trait;
use chrono::Utc;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use uuid::Uuid;

use crate::auth::application::{
    domain::entities::{User, UserId, UserSummary},
    ports::outgoing::{
        token_provider::{ACCESS_TOKEN_TYPE, REFRESH_TOKEN_TYPE},
        HashError, NewUser, PasswordHasher, ProfileChanges, TokenClaims, TokenError,
        TokenProvider, UserQuery, UserQueryError, UserRepository, UserRepositoryError,
    },
};

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn sample_user(username: &str) -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: "hashed::password123".to_string(),
        first_name: capitalize(username),
        last_name: "Tester".to_string(),
        bio: String::new(),
        avatar: None,
        is_superuser: false,
        created_at: now,
        updated_at: now,
    }
}

/// In-memory user store implementing both the query and repository ports.
#[derive(Clone, Default)]
pub struct InMemoryUsers {
    users: Arc<Mutex<Vec<User>>>,
    friends: Arc<Mutex<HashMap<Uuid, u64>>>,
}

impl InMemoryUsers {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
            friends: Arc::default(),
        }
    }

    pub fn set_friends_count(&self, user_id: Uuid, count: u64) {
        self.friends.lock().unwrap().insert(user_id, count);
    }

    pub fn by_username(&self, username: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == user_id.value())
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self.by_username(username))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserQueryError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn search(
        &self,
        term: &str,
        exclude: UserId,
        limit: u64,
    ) -> Result<Vec<UserSummary>, UserQueryError> {
        let term = term.to_lowercase();
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.id != exclude.value())
            .filter(|u| {
                [&u.username, &u.first_name, &u.last_name]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&term))
            })
            .take(limit as usize)
            .map(UserSummary::from)
            .collect())
    }

    async fn find_summaries(&self, ids: &[UserId]) -> Result<Vec<UserSummary>, UserQueryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| ids.contains(&u.user_id()))
            .map(UserSummary::from)
            .collect())
    }

    async fn count_friends(&self, user_id: UserId) -> Result<u64, UserQueryError> {
        Ok(self
            .friends
            .lock()
            .unwrap()
            .get(&user_id.value())
            .copied()
            .unwrap_or(0))
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == user.username) {
            return Err(UserRepositoryError::UsernameTaken);
        }

        let now = Utc::now();
        let created = User {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            first_name: user.first_name,
            last_name: user.last_name,
            bio: String::new(),
            avatar: None,
            is_superuser: false,
            created_at: now,
            updated_at: now,
        };
        users.push(created.clone());
        Ok(created)
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<User, UserRepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id.value())
            .ok_or(UserRepositoryError::UserNotFound)?;

        if let Some(v) = changes.username {
            user.username = v;
        }
        if let Some(v) = changes.email {
            user.email = v;
        }
        if let Some(v) = changes.first_name {
            user.first_name = v;
        }
        if let Some(v) = changes.last_name {
            user.last_name = v;
        }
        if let Some(v) = changes.bio {
            user.bio = v;
        }
        if let Some(v) = changes.avatar {
            user.avatar = Some(v);
        }
        if let Some(v) = changes.password_hash {
            user.password_hash = v;
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }
}

/// Deterministic hasher: `hashed::<password>`.
#[derive(Clone, Copy, Default)]
pub struct PrefixHasher;

#[async_trait]
impl PasswordHasher for PrefixHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed::{password}"))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed::{password}"))
    }
}

/// Tokens of the form `access-<uuid>` / `refresh-<uuid>`.
#[derive(Clone, Copy, Default)]
pub struct FakeTokenProvider;

impl TokenProvider for FakeTokenProvider {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        Ok(format!("access-{user_id}"))
    }

    fn generate_refresh_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        Ok(format!("refresh-{user_id}"))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let (token_type, raw_id) = token.split_once('-').ok_or(TokenError::MalformedToken)?;
        let sub = Uuid::parse_str(raw_id).map_err(|_| TokenError::MalformedToken)?;

        Ok(TokenClaims {
            sub,
            exp: 9_999_999_999,
            iat: 0,
            nbf: 0,
            iss: "test".to_string(),
            token_type: token_type.to_string(),
        })
    }

    fn refresh_access_token(&self, refresh_token: &str) -> Result<String, TokenError> {
        let claims = self.verify_token(refresh_token)?;
        if claims.token_type != REFRESH_TOKEN_TYPE {
            return Err(TokenError::InvalidTokenType(REFRESH_TOKEN_TYPE.to_string()));
        }
        self.generate_access_token(claims.sub)
    }
}

impl FakeTokenProvider {
    pub fn access_header(user_id: Uuid) -> (&'static str, String) {
        ("Authorization", format!("Bearer {ACCESS_TOKEN_TYPE}-{user_id}"))
    }
}
