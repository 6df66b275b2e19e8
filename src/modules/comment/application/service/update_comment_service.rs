use async_trait::async_trait;

use crate::comment::application::domain::CommentView;
use crate::comment::application::ports::incoming::use_cases::{
    UpdateCommentCommand, UpdateCommentError, UpdateCommentUseCase,
};
use crate::comment::application::ports::outgoing::{CommentQuery, CommentRepository};

pub struct UpdateCommentService<R, Q>
where
    R: CommentRepository,
    Q: CommentQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> UpdateCommentService<R, Q>
where
    R: CommentRepository,
    Q: CommentQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> UpdateCommentUseCase for UpdateCommentService<R, Q>
where
    R: CommentRepository + Send + Sync,
    Q: CommentQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: UpdateCommentCommand,
    ) -> Result<CommentView, UpdateCommentError> {
        let comment = self
            .repository
            .find(command.comment_id)
            .await?
            .ok_or(UpdateCommentError::NotFound)?;

        if comment.author_id != command.editor {
            return Err(UpdateCommentError::Forbidden);
        }

        self.repository
            .update_content(comment.id, command.content)
            .await?;

        self.query
            .find(comment.id)
            .await?
            .ok_or(UpdateCommentError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::tests::support::comment_fixtures::InMemoryComments;
    use uuid::Uuid;

    #[tokio::test]
    async fn author_can_edit_content() {
        let store = InMemoryComments::default();
        let author = Uuid::new_v4();
        let comment = store.insert(author, Uuid::new_v4(), "typo");
        let service = UpdateCommentService::new(store.clone(), store.clone());

        let view = service
            .execute(UpdateCommentCommand::new(UserId::from(author), comment.id, "fixed").unwrap())
            .await
            .unwrap();

        assert_eq!(view.content, "fixed");
        assert_eq!(store.get(comment.id).unwrap().content, "fixed");
    }

    #[tokio::test]
    async fn other_user_is_forbidden_and_content_is_kept() {
        let store = InMemoryComments::default();
        let comment = store.insert(Uuid::new_v4(), Uuid::new_v4(), "original");
        let service = UpdateCommentService::new(store.clone(), store.clone());

        let result = service
            .execute(
                UpdateCommentCommand::new(UserId::from(Uuid::new_v4()), comment.id, "hijack")
                    .unwrap(),
            )
            .await;

        assert_eq!(result.unwrap_err(), UpdateCommentError::Forbidden);
        assert_eq!(store.get(comment.id).unwrap().content, "original");
    }
}
