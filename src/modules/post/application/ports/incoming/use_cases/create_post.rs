use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::media::application::domain::ImageUpload;
use crate::post::application::domain::{PostValidationError, PostView};
use crate::post::application::ports::outgoing::{PostQueryError, PostRepositoryError};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    author: UserId,
    content: String,
    image: Option<ImageUpload>,
}

impl CreatePostCommand {
    /// Content may be empty only when an image is attached.
    pub fn new(
        author: UserId,
        content: &str,
        image: Option<ImageUpload>,
    ) -> Result<Self, PostValidationError> {
        let content = content.trim().to_string();
        if content.is_empty() && image.is_none() {
            return Err(PostValidationError::EmptyPost);
        }

        Ok(Self {
            author,
            content,
            image,
        })
    }

    pub fn author(&self) -> UserId {
        self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_image(self) -> Option<ImageUpload> {
        self.image
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreatePostError {
    #[error("Image upload failed: {0}")]
    StorageFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PostRepositoryError> for CreatePostError {
    fn from(err: PostRepositoryError) -> Self {
        CreatePostError::RepositoryError(err.to_string())
    }
}

impl From<PostQueryError> for CreatePostError {
    fn from(err: PostQueryError) -> Self {
        CreatePostError::RepositoryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreatePostUseCase: Send + Sync {
    async fn execute(&self, command: CreatePostCommand) -> Result<PostView, CreatePostError>;
}
