use async_trait::async_trait;
use std::sync::Arc;

use crate::media::application::ports::outgoing::MediaStore;
use crate::post::application::domain::{PostView, POST_IMAGE_FOLDER};
use crate::post::application::ports::incoming::use_cases::{
    CreatePostCommand, CreatePostError, CreatePostUseCase,
};
use crate::post::application::ports::outgoing::{NewPost, PostQuery, PostRepository};

pub struct CreatePostService<R, Q>
where
    R: PostRepository,
    Q: PostQuery,
{
    repository: R,
    query: Q,
    media_store: Arc<dyn MediaStore + Send + Sync>,
}

impl<R, Q> CreatePostService<R, Q>
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
impl<R, Q> CreatePostUseCase for CreatePostService<R, Q>
where
    R: PostRepository + Send + Sync,
    Q: PostQuery + Send + Sync,
{
    async fn execute(&self, command: CreatePostCommand) -> Result<PostView, CreatePostError> {
        let author = command.author();
        let content = command.content().to_string();

        let image = match command.into_image() {
            Some(upload) => Some(
                self.media_store
                    .save(POST_IMAGE_FOLDER, upload)
                    .await
                    .map_err(|e| CreatePostError::StorageFailed(e.to_string()))?,
            ),
            None => None,
        };

        let post = self
            .repository
            .create(NewPost {
                author_id: author,
                content,
                image,
            })
            .await?;

        self.query.find(author, post.id).await?.ok_or_else(|| {
            CreatePostError::RepositoryError(format!("post {} vanished", post.id))
        })
    }
}
