use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::seed::application::domain::SeedUser;
use crate::seed::application::ports::outgoing::{SeedStore, SeedStoreError};

#[derive(Debug, Clone)]
pub struct StoredSeedUser {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
    pub is_superuser: bool,
}

#[derive(Debug, Clone)]
pub struct StoredSeedPost {
    pub id: Uuid,
    pub author: UserId,
    pub content: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StoredSeedComment {
    pub author: UserId,
    pub post_id: Uuid,
    pub content: String,
}

#[derive(Debug, Default)]
struct SeedState {
    users: Vec<StoredSeedUser>,
    friendships: BTreeSet<(UserId, UserId)>,
    posts: Vec<StoredSeedPost>,
    likes: Vec<(UserId, Uuid)>,
    comments: Vec<StoredSeedComment>,
    messages: Vec<(UserId, UserId, String)>,
}

/// Shared in-memory [`SeedStore`]; clones see the same data.
#[derive(Clone, Default)]
pub struct InMemorySeedStore {
    state: Arc<Mutex<SeedState>>,
    fail_posts: bool,
}

impl InMemorySeedStore {
    pub fn with_superuser(username: &str) -> Self {
        let store = Self::default();
        store.state.lock().unwrap().users.push(StoredSeedUser {
            id: UserId::from(Uuid::new_v4()),
            username: username.to_string(),
            password_hash: "admin-hash".to_string(),
            is_superuser: true,
        });
        store
    }

    pub fn failing_on_posts() -> Self {
        Self {
            fail_posts: true,
            ..Self::default()
        }
    }

    pub fn user_count(&self) -> usize {
        self.state.lock().unwrap().users.len()
    }

    pub fn friendship_rows(&self) -> usize {
        self.state.lock().unwrap().friendships.len()
    }

    pub fn posts(&self) -> Vec<StoredSeedPost> {
        self.state.lock().unwrap().posts.clone()
    }

    pub fn likes(&self) -> Vec<(UserId, Uuid)> {
        self.state.lock().unwrap().likes.clone()
    }

    pub fn comments(&self) -> Vec<StoredSeedComment> {
        self.state.lock().unwrap().comments.clone()
    }

    pub fn messages(&self) -> Vec<(UserId, UserId, String)> {
        self.state.lock().unwrap().messages.clone()
    }

    pub fn password_hashes(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .users
            .iter()
            .filter(|u| !u.is_superuser)
            .map(|u| u.password_hash.clone())
            .collect()
    }
}

#[async_trait]
impl SeedStore for InMemorySeedStore {
    async fn clear(&self) -> Result<(), SeedStoreError> {
        let mut state = self.state.lock().unwrap();
        state.messages.clear();
        state.comments.clear();
        state.likes.clear();
        state.posts.clear();
        state.users.retain(|u| u.is_superuser);
        let remaining: BTreeSet<UserId> = state.users.iter().map(|u| u.id).collect();
        state
            .friendships
            .retain(|(a, b)| remaining.contains(a) && remaining.contains(b));
        Ok(())
    }

    async fn find_user(&self, username: &str) -> Result<Option<UserId>, SeedStoreError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.id))
    }

    async fn create_user(
        &self,
        user: &SeedUser,
        password_hash: &str,
    ) -> Result<UserId, SeedStoreError> {
        let id = UserId::from(Uuid::new_v4());
        self.state.lock().unwrap().users.push(StoredSeedUser {
            id,
            username: user.username.to_string(),
            password_hash: password_hash.to_string(),
            is_superuser: false,
        });
        Ok(id)
    }

    async fn add_friendship(&self, a: UserId, b: UserId) -> Result<(), SeedStoreError> {
        let mut state = self.state.lock().unwrap();
        state.friendships.insert((a, b));
        state.friendships.insert((b, a));
        Ok(())
    }

    async fn create_post(
        &self,
        author: UserId,
        content: &str,
        image: Option<String>,
    ) -> Result<Uuid, SeedStoreError> {
        if self.fail_posts {
            return Err(SeedStoreError::DatabaseError("posts unavailable".to_string()));
        }
        let id = Uuid::new_v4();
        self.state.lock().unwrap().posts.push(StoredSeedPost {
            id,
            author,
            content: content.to_string(),
            image,
        });
        Ok(id)
    }

    async fn add_like(&self, user: UserId, post_id: Uuid) -> Result<bool, SeedStoreError> {
        let mut state = self.state.lock().unwrap();
        if state.likes.contains(&(user, post_id)) {
            return Ok(false);
        }
        state.likes.push((user, post_id));
        Ok(true)
    }

    async fn create_comment(
        &self,
        author: UserId,
        post_id: Uuid,
        content: &str,
    ) -> Result<(), SeedStoreError> {
        self.state.lock().unwrap().comments.push(StoredSeedComment {
            author,
            post_id,
            content: content.to_string(),
        });
        Ok(())
    }

    async fn create_message(
        &self,
        sender: UserId,
        receiver: UserId,
        content: &str,
    ) -> Result<(), SeedStoreError> {
        self.state
            .lock()
            .unwrap()
            .messages
            .push((sender, receiver, content.to_string()));
        Ok(())
    }
}
