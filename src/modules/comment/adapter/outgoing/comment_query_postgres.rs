use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use super::sea_orm_entity::comments::{Column, Entity, Model};
use crate::auth::adapter::outgoing::sea_orm_entity::users::summaries_by_id;
use crate::comment::application::domain::CommentView;
use crate::comment::application::ports::outgoing::{CommentQuery, CommentQueryError};

#[derive(Clone)]
pub struct CommentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn with_authors(&self, comments: Vec<Model>) -> Result<Vec<CommentView>, DbErr> {
        let authors = summaries_by_id(&*self.db, comments.iter().map(|c| c.author_id)).await?;

        Ok(comments
            .iter()
            .filter_map(|c| match authors.get(&c.author_id) {
                Some(author) => Some(c.to_view(author.clone())),
                None => {
                    warn!(comment_id = %c.id, "Comment author missing; skipping");
                    None
                }
            })
            .collect())
    }
}

fn map_db_err(e: DbErr) -> CommentQueryError {
    CommentQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CommentQuery for CommentQueryPostgres {
    async fn list(&self, post_id: Option<Uuid>) -> Result<Vec<CommentView>, CommentQueryError> {
        let mut select = Entity::find();
        if let Some(post_id) = post_id {
            select = select.filter(Column::PostId.eq(post_id));
        }

        let comments = select
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.with_authors(comments).await.map_err(map_db_err)
    }

    async fn find(&self, comment_id: Uuid) -> Result<Option<CommentView>, CommentQueryError> {
        let Some(comment) = Entity::find_by_id(comment_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut views = self.with_authors(vec![comment]).await.map_err(map_db_err)?;

        Ok(views.pop())
    }
}
