use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserSummary};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: Uuid,
    pub author_id: UserId,
    pub post_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Comment as rendered by the API, also embedded in post views.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CommentView {
    pub id: Uuid,
    pub author: UserSummary,
    /// Id of the commented post
    pub post: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommentValidationError {
    #[error("This field may not be blank.")]
    EmptyContent,
}

pub fn validate_comment_content(content: &str) -> Result<String, CommentValidationError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(CommentValidationError::EmptyContent);
    }
    Ok(trimmed.to_string())
}
