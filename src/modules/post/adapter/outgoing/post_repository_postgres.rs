use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::posts::{ActiveModel, Entity};
use crate::post::application::domain::Post;
use crate::post::application::ports::outgoing::{
    NewPost, PatchField, PostChanges, PostRepository, PostRepositoryError,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn create(&self, data: NewPost) -> Result<Post, PostRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            author_id: Set(data.author_id.value()),
            content: Set(data.content),
            image: Set(data.image),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn find(&self, post_id: Uuid) -> Result<Option<Post>, PostRepositoryError> {
        let found = Entity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(|m| m.to_domain()))
    }

    async fn update(
        &self,
        post_id: Uuid,
        changes: PostChanges,
    ) -> Result<Post, PostRepositoryError> {
        let existing = Entity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(PostRepositoryError::NotFound)?;

        let mut model = existing.clone().into_active_model();

        if let Some(content) = changes.content {
            model.content = Set(content);
        }

        match changes.image {
            PatchField::Unset => {}
            PatchField::Null => model.image = Set(None),
            PatchField::Value(path) => model.image = Set(Some(path)),
        }

        if !model.is_changed() {
            return Ok(existing.to_domain());
        }

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.to_domain())
    }

    async fn delete(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        let result = Entity::delete_by_id(post_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PostRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> PostRepositoryError {
    PostRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
