use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserSummary};
use crate::comment::application::domain::CommentView;

/// Media store folder for post images.
pub const POST_IMAGE_FOLDER: &str = "posts";

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: Uuid,
    pub author_id: UserId,
    pub content: String,
    /// Relative media path
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

/// Post as seen by a particular viewer.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PostView {
    pub id: Uuid,
    pub author: UserSummary,
    pub content: String,
    /// Image URL under `/media/`
    pub image: Option<String>,
    pub likes_count: u64,
    pub comments_count: u64,
    /// Oldest first
    pub comments: Vec<CommentView>,
    /// Whether the viewer liked this post
    pub is_liked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct LikeToggle {
    pub liked: bool,
    pub likes_count: u64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PostValidationError {
    #[error("A post needs text content or an image.")]
    EmptyPost,
}
