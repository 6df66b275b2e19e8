use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Set};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::messages::{ActiveModel, Entity};
use crate::message::application::domain::Message;
use crate::message::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError, NewMessage,
};

#[derive(Clone)]
pub struct MessageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> MessageRepositoryError {
    MessageRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl MessageRepository for MessageRepositoryPostgres {
    async fn create(&self, data: NewMessage) -> Result<Message, MessageRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            sender_id: Set(data.sender_id.value()),
            receiver_id: Set(data.receiver_id.value()),
            content: Set(data.content),
            is_read: Set(false),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn find(&self, message_id: Uuid) -> Result<Option<Message>, MessageRepositoryError> {
        let found = Entity::find_by_id(message_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(|m| m.to_domain()))
    }

    async fn update_content(
        &self,
        message_id: Uuid,
        content: String,
    ) -> Result<Message, MessageRepositoryError> {
        let existing = Entity::find_by_id(message_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(MessageRepositoryError::NotFound)?;

        let mut model = existing.into_active_model();
        model.content = Set(content);

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;

        Ok(updated.to_domain())
    }

    async fn delete(&self, message_id: Uuid) -> Result<(), MessageRepositoryError> {
        let result = Entity::delete_by_id(message_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(MessageRepositoryError::NotFound);
        }

        Ok(())
    }
}
