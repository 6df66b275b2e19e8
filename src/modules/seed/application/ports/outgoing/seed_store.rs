use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::seed::application::domain::SeedUser;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeedStoreError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write access used by the seeder. Implementations are expected to run
/// inside one transaction.
#[async_trait]
pub trait SeedStore: Send + Sync {
    /// Removes messages, comments, likes, posts and every non-superuser account.
    async fn clear(&self) -> Result<(), SeedStoreError>;

    async fn find_user(&self, username: &str) -> Result<Option<UserId>, SeedStoreError>;

    async fn create_user(
        &self,
        user: &SeedUser,
        password_hash: &str,
    ) -> Result<UserId, SeedStoreError>;

    /// Stores both directions; existing rows are left alone.
    async fn add_friendship(&self, a: UserId, b: UserId) -> Result<(), SeedStoreError>;

    async fn create_post(
        &self,
        author: UserId,
        content: &str,
        image: Option<String>,
    ) -> Result<Uuid, SeedStoreError>;

    /// Get-or-create; returns whether a new like was stored.
    async fn add_like(&self, user: UserId, post_id: Uuid) -> Result<bool, SeedStoreError>;

    async fn create_comment(
        &self,
        author: UserId,
        post_id: Uuid,
        content: &str,
    ) -> Result<(), SeedStoreError>;

    async fn create_message(
        &self,
        sender: UserId,
        receiver: UserId,
        content: &str,
    ) -> Result<(), SeedStoreError>;
}
