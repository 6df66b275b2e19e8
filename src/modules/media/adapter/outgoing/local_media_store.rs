use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use uuid::Uuid;

use crate::media::application::{
    domain::ImageUpload,
    ports::outgoing::{MediaStore, MediaStoreError},
};

/// Width of the `posts.image` and `users.avatar` columns.
const MAX_STORED_PATH_LEN: usize = 255;

/// Media store backed by a directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalMediaStore {
    root: PathBuf,
}

impl LocalMediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `folder/<uuid>_<name>`, with the name stem cut so the whole path fits
    /// [`MAX_STORED_PATH_LEN`]. The extension is kept.
    fn stored_path(folder: &str, file_name: &str) -> String {
        let cleaned: String = file_name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        let prefix = format!("{}/{}_", folder, Uuid::new_v4().simple());
        let budget = MAX_STORED_PATH_LEN.saturating_sub(prefix.len());

        // `cleaned` is ASCII, so byte slicing stays on char boundaries.
        let name = if cleaned.len() <= budget {
            cleaned
        } else {
            match cleaned.rsplit_once('.') {
                Some((stem, ext)) if ext.len() + 1 < budget => {
                    format!("{}.{}", &stem[..stem.len().min(budget - ext.len() - 1)], ext)
                }
                _ => cleaned[..budget].to_string(),
            }
        };

        prefix + &name
    }

    /// Resolves a relative media path, refusing anything that escapes the root.
    fn resolve(&self, relative: &str) -> Result<PathBuf, MediaStoreError> {
        let relative = Path::new(relative);
        if relative.as_os_str().is_empty() {
            return Err(MediaStoreError::InvalidPath);
        }

        let is_plain = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if !is_plain {
            return Err(MediaStoreError::InvalidPath);
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn save(&self, folder: &str, upload: ImageUpload) -> Result<String, MediaStoreError> {
        let relative = Self::stored_path(folder, upload.file_name());
        let target = self.resolve(&relative)?;

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| MediaStoreError::Storage(e.to_string()))?;
        }

        tokio::fs::write(&target, upload.bytes())
            .await
            .map_err(|e| MediaStoreError::Storage(e.to_string()))?;

        tracing::debug!(path = %relative, "Stored media file");
        Ok(relative)
    }

    async fn load(&self, path: &str) -> Result<Vec<u8>, MediaStoreError> {
        let target = self.resolve(path)?;

        tokio::fs::read(&target).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => MediaStoreError::NotFound,
            _ => MediaStoreError::Storage(e.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::application::domain::UploadPolicy;

    fn temp_store() -> LocalMediaStore {
        LocalMediaStore::new(std::env::temp_dir().join(format!("media-test-{}", Uuid::new_v4())))
    }

    #[tokio::test]
    async fn save_then_load_returns_same_bytes() {
        let store = temp_store();
        let upload =
            ImageUpload::new("my photo.png", vec![9, 8, 7], &UploadPolicy::default()).unwrap();

        let path = store.save("posts", upload).await.unwrap();

        assert!(path.starts_with("posts/"));
        assert!(path.ends_with("_my_photo.png"));
        assert_eq!(store.load(&path).await.unwrap(), vec![9, 8, 7]);

        let _ = tokio::fs::remove_dir_all(store.root()).await;
    }

    #[tokio::test]
    async fn saving_same_name_twice_yields_distinct_paths() {
        let store = temp_store();
        let policy = UploadPolicy::default();

        let first = store
            .save("avatars", ImageUpload::new("a.png", vec![1], &policy).unwrap())
            .await
            .unwrap();
        let second = store
            .save("avatars", ImageUpload::new("a.png", vec![2], &policy).unwrap())
            .await
            .unwrap();

        assert_ne!(first, second);

        let _ = tokio::fs::remove_dir_all(store.root()).await;
    }

    #[tokio::test]
    async fn long_file_name_is_shortened_to_fit_column() {
        let store = temp_store();
        let file_name = format!("{}.png", "a".repeat(246));
        let upload = ImageUpload::new(&file_name, vec![4, 2], &UploadPolicy::default()).unwrap();

        let path = store.save("posts", upload).await.unwrap();

        assert_eq!(path.len(), MAX_STORED_PATH_LEN);
        assert!(path.starts_with("posts/"));
        assert!(path.ends_with("aaa.png"));
        assert_eq!(store.load(&path).await.unwrap(), vec![4, 2]);

        let _ = tokio::fs::remove_dir_all(store.root()).await;
    }

    #[test]
    fn name_just_under_the_limit_is_kept_whole() {
        let file_name = format!("{}.webp", "b".repeat(200));

        let path = LocalMediaStore::stored_path("avatars", &file_name);

        assert!(path.len() <= MAX_STORED_PATH_LEN);
        assert!(path.ends_with(&file_name));
    }

    #[test]
    fn every_accepted_name_length_fits_the_column() {
        for len in 1..=UploadPolicy::default().max_file_name_len - 4 {
            let file_name = format!("{}.jpg", "c".repeat(len));
            for folder in ["posts", "avatars"] {
                let path = LocalMediaStore::stored_path(folder, &file_name);
                assert!(path.len() <= MAX_STORED_PATH_LEN, "{len} in {folder}");
                assert!(path.ends_with(".jpg"));
            }
        }
    }

    #[tokio::test]
    async fn load_missing_file_is_not_found() {
        let store = temp_store();

        assert_eq!(
            store.load("posts/missing.png").await.unwrap_err(),
            MediaStoreError::NotFound
        );
    }

    #[tokio::test]
    async fn load_rejects_path_traversal() {
        let store = temp_store();

        assert_eq!(
            store.load("../etc/passwd").await.unwrap_err(),
            MediaStoreError::InvalidPath
        );
        assert_eq!(
            store.load("/etc/passwd").await.unwrap_err(),
            MediaStoreError::InvalidPath
        );
    }
}
