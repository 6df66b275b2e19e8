use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::media::application::domain::ImageUpload;
use crate::post::application::domain::PostView;
use crate::post::application::ports::outgoing::{PatchField, PostQueryError, PostRepositoryError};

#[derive(Debug, Clone)]
pub struct UpdatePostCommand {
    pub editor: UserId,
    pub post_id: Uuid,
    pub content: Option<String>,
    /// `Null` removes the current image
    pub image: PatchField<ImageUpload>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UpdatePostError {
    #[error("Post not found")]
    NotFound,

    #[error("Not your post.")]
    Forbidden,

    #[error("A post needs text content or an image.")]
    EmptyPost,

    #[error("Image upload failed: {0}")]
    StorageFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<PostRepositoryError> for UpdatePostError {
    fn from(err: PostRepositoryError) -> Self {
        match err {
            PostRepositoryError::NotFound => UpdatePostError::NotFound,
            PostRepositoryError::DatabaseError(msg) => UpdatePostError::RepositoryError(msg),
        }
    }
}

impl From<PostQueryError> for UpdatePostError {
    fn from(err: PostQueryError) -> Self {
        UpdatePostError::RepositoryError(err.to_string())
    }
}

#[async_trait]
pub trait UpdatePostUseCase: Send + Sync {
    async fn execute(&self, command: UpdatePostCommand) -> Result<PostView, UpdatePostError>;
}
