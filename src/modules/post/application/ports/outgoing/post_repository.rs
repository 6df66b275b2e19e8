// src/modules/post/application/ports/outgoing/post_repository.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::Post;

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field omitted => keep stored value
// - Null: explicit null => clear a nullable column
// - Value(v): replace with v
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> PatchField<U> {
        match self {
            PatchField::Unset => PatchField::Unset,
            PatchField::Null => PatchField::Null,
            PatchField::Value(v) => PatchField::Value(f(v)),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct NewPost {
    pub author_id: UserId,
    pub content: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub content: Option<String>,
    pub image: PatchField<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("Post not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, data: NewPost) -> Result<Post, PostRepositoryError>;

    async fn find(&self, post_id: Uuid) -> Result<Option<Post>, PostRepositoryError>;

    async fn update(&self, post_id: Uuid, changes: PostChanges)
        -> Result<Post, PostRepositoryError>;

    /// Likes and comments go with the post.
    async fn delete(&self, post_id: Uuid) -> Result<(), PostRepositoryError>;
}
