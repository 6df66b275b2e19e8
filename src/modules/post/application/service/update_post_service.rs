use async_trait::async_trait;
use std::sync::Arc;

use crate::media::application::ports::outgoing::MediaStore;
use crate::post::application::domain::{PostView, POST_IMAGE_FOLDER};
use crate::post::application::ports::incoming::use_cases::{
    UpdatePostCommand, UpdatePostError, UpdatePostUseCase,
};
use crate::post::application::ports::outgoing::{
    PatchField, PostChanges, PostQuery, PostRepository,
};

pub struct UpdatePostService<R, Q>
where
    R: PostRepository,
    Q: PostQuery,
{
    repository: R,
    query: Q,
    media_store: Arc<dyn MediaStore + Send + Sync>,
}

impl<R, Q> UpdatePostService<R, Q>
where
    R: PostRepository,
    Q: PostQuery,
{
    pub fn new(repository: R, query: Q, media_store: Arc<dyn MediaStore + Send + Sync>) -> Self {
        Self {
            repository,
            query,
            media_store,
        }
    }
}

#[async_trait]
impl<R, Q> UpdatePostUseCase for UpdatePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, command: UpdatePostCommand) -> Result<PostView, UpdatePostError> {
        let post = self
            .repository
            .find(command.post_id)
            .await?
            .ok_or(UpdatePostError::NotFound)?;

        if !post.is_authored_by(command.editor) {
            return Err(UpdatePostError::Forbidden);
        }

        let content = command.content.map(|c| c.trim().to_string());
        let has_content = !content.as_deref().unwrap_or(&post.content).is_empty();
        let has_image = match &command.image {
            PatchField::Unset => post.image.is_some(),
            PatchField::Null => false,
            PatchField::Value(_) => true,
        };
        if !has_content && !has_image {
            return Err(UpdatePostError::EmptyPost);
        }

        let image = match command.image {
            PatchField::Value(upload) => PatchField::Value(
                self.media_store
                    .save(POST_IMAGE_FOLDER, upload)
                    .await
                    .map_err(|e| UpdatePostError::StorageFailed(e.to_string()))?,
            ),
            PatchField::Null => PatchField::Null,
            PatchField::Unset => PatchField::Unset,
        };

        self.repository
            .update(post.id, PostChanges { content, image })
            .await?;

        self.query
            .find(command.editor, post.id)
            .await?
            .ok_or(UpdatePostError::NotFound)
    }
}
