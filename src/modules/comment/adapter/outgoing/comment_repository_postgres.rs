use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::comments::{ActiveModel, Entity};
use crate::comment::application::domain::Comment;
use crate::comment::application::ports::outgoing::{
    CommentRepository, CommentRepositoryError, NewComment,
};
use crate::post::adapter::outgoing::sea_orm_entity::posts::Entity as PostEntity;

#[derive(Clone)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> CommentRepositoryError {
    CommentRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn create(&self, data: NewComment) -> Result<Comment, CommentRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            author_id: Set(data.author_id.value()),
            post_id: Set(data.post_id),
            content: Set(data.content),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn find(&self, comment_id: Uuid) -> Result<Option<Comment>, CommentRepositoryError> {
        let found = Entity::find_by_id(comment_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(|m| m.to_domain()))
    }

    async fn update_content(
        &self,
        comment_id: Uuid,
        content: String,
    ) -> Result<Comment, CommentRepositoryError> {
        let existing = Entity::find_by_id(comment_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(CommentRepositoryError::NotFound)?;

        let mut model = existing.into_active_model();
        model.content = Set(content);

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.to_domain())
    }

    async fn delete(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError> {
        let result = Entity::delete_by_id(comment_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CommentRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn post_exists(&self, post_id: Uuid) -> Result<bool, CommentRepositoryError> {
        let count = PostEntity::find_by_id(post_id)
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }
}
