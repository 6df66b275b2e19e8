use async_trait::async_trait;

use crate::media::application::domain::ImageUpload;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MediaStoreError {
    #[error("Media not found")]
    NotFound,

    #[error("Invalid media path")]
    InvalidPath,

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Storage for uploaded images, addressed by relative path.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Stores the upload under `folder` and returns its relative path.
    async fn save(&self, folder: &str, upload: ImageUpload) -> Result<String, MediaStoreError>;

    async fn load(&self, path: &str) -> Result<Vec<u8>, MediaStoreError>;
}
