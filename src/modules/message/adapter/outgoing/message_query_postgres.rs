use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use super::sea_orm_entity::messages::{Column, Entity, Model};
use crate::auth::adapter::outgoing::sea_orm_entity::users::summaries_by_id;
use crate::auth::application::domain::entities::UserId;
use crate::message::application::domain::MessageView;
use crate::message::application::ports::outgoing::{MessageQuery, MessageQueryError};

#[derive(Clone)]
pub struct MessageQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MessageQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn with_parties(&self, messages: Vec<Model>) -> Result<Vec<MessageView>, DbErr> {
        let users = summaries_by_id(
            &*self.db,
            messages
                .iter()
                .flat_map(|m| [m.sender_id, m.receiver_id]),
        )
        .await?;

        Ok(messages
            .iter()
            .filter_map(
                |m| match (users.get(&m.sender_id), users.get(&m.receiver_id)) {
                    (Some(sender), Some(receiver)) => {
                        Some(m.to_view(sender.clone(), receiver.clone()))
                    }
                    _ => {
                        warn!(message_id = %m.id, "Message party missing; skipping");
                        None
                    }
                },
            )
            .collect())
    }
}

fn involving(user: UserId) -> Condition {
    Condition::any()
        .add(Column::SenderId.eq(user.value()))
        .add(Column::ReceiverId.eq(user.value()))
}

fn between(a: UserId, b: UserId) -> Condition {
    Condition::any()
        .add(
            Condition::all()
                .add(Column::SenderId.eq(a.value()))
                .add(Column::ReceiverId.eq(b.value())),
        )
        .add(
            Condition::all()
                .add(Column::SenderId.eq(b.value()))
                .add(Column::ReceiverId.eq(a.value())),
        )
}

fn map_db_err(e: DbErr) -> MessageQueryError {
    MessageQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl MessageQuery for MessageQueryPostgres {
    async fn list(
        &self,
        user: UserId,
        with: Option<UserId>,
    ) -> Result<Vec<MessageView>, MessageQueryError> {
        let condition = match with {
            Some(other) => between(user, other),
            None => involving(user),
        };

        let messages = Entity::find()
            .filter(condition)
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.with_parties(messages).await.map_err(map_db_err)
    }

    async fn find(&self, message_id: Uuid) -> Result<Option<MessageView>, MessageQueryError> {
        let Some(message) = Entity::find_by_id(message_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut views = self.with_parties(vec![message]).await.map_err(map_db_err)?;

        Ok(views.pop())
    }

    async fn participant_pairs(
        &self,
        user: UserId,
    ) -> Result<Vec<(UserId, UserId)>, MessageQueryError> {
        let messages = Entity::find()
            .filter(involving(user))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(messages
            .iter()
            .map(|m| (UserId::from(m.sender_id), UserId::from(m.receiver_id)))
            .collect())
    }
}
