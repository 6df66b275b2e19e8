use async_trait::async_trait;

use crate::comment::application::domain::CommentView;
use crate::comment::application::ports::incoming::use_cases::{
    CreateCommentCommand, CreateCommentError, CreateCommentUseCase,
};
use crate::comment::application::ports::outgoing::{CommentQuery, CommentRepository, NewComment};

pub struct CreateCommentService<R, Q>
where
    R: CommentRepository,
    Q: CommentQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> CreateCommentService<R, Q>
where
    R: CommentRepository,
    Q: CommentQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> CreateCommentUseCase for CreateCommentService<R, Q>
where
    R: CommentRepository + Send + Sync,
    Q: CommentQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateCommentCommand,
    ) -> Result<CommentView, CreateCommentError> {
        if !self.repository.post_exists(command.post_id()).await? {
            return Err(CreateCommentError::PostNotFound);
        }

        let comment = self
            .repository
            .create(NewComment {
                author_id: command.author(),
                post_id: command.post_id(),
                content: command.content().to_string(),
            })
            .await?;

        self.query.find(comment.id).await?.ok_or_else(|| {
            CreateCommentError::RepositoryError(format!("comment {} vanished", comment.id))
        })
    }
}
