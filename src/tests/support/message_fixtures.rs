use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::message::application::domain::{Message, MessageView};
use crate::message::application::ports::outgoing::{
    MessageQuery, MessageQueryError, MessageRepository, MessageRepositoryError, NewMessage,
};
use crate::tests::support::comment_fixtures::summary_for;

pub fn message_view_of(message: &Message) -> MessageView {
    MessageView {
        id: message.id,
        sender: summary_for(message.sender_id.value()),
        receiver: summary_for(message.receiver_id.value()),
        content: message.content.clone(),
        is_read: message.is_read,
        created_at: message.created_at,
    }
}

/// Messages in insertion order; each insert is one second after the previous.
#[derive(Clone, Default)]
pub struct InMemoryMessages {
    messages: Arc<Mutex<Vec<Message>>>,
}

impl InMemoryMessages {
    pub fn insert(&self, sender: Uuid, receiver: Uuid, content: &str) -> Message {
        let mut messages = self.messages.lock().unwrap();
        let message = Message {
            id: Uuid::new_v4(),
            sender_id: UserId::from(sender),
            receiver_id: UserId::from(receiver),
            content: content.to_string(),
            is_read: false,
            created_at: Utc::now() + Duration::seconds(messages.len() as i64),
        };
        messages.push(message.clone());
        message
    }

    pub fn get(&self, message_id: Uuid) -> Option<Message> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == message_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().unwrap().len()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessages {
    async fn create(&self, data: NewMessage) -> Result<Message, MessageRepositoryError> {
        Ok(self.insert(
            data.sender_id.value(),
            data.receiver_id.value(),
            &data.content,
        ))
    }

    async fn find(&self, message_id: Uuid) -> Result<Option<Message>, MessageRepositoryError> {
        Ok(self.get(message_id))
    }

    async fn update_content(
        &self,
        message_id: Uuid,
        content: String,
    ) -> Result<Message, MessageRepositoryError> {
        let mut messages = self.messages.lock().unwrap();
        let message = messages
            .iter_mut()
            .find(|m| m.id == message_id)
            .ok_or(MessageRepositoryError::NotFound)?;
        message.content = content;
        Ok(message.clone())
    }

    async fn delete(&self, message_id: Uuid) -> Result<(), MessageRepositoryError> {
        let mut messages = self.messages.lock().unwrap();
        let before = messages.len();
        messages.retain(|m| m.id != message_id);
        if messages.len() == before {
            return Err(MessageRepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl MessageQuery for InMemoryMessages {
    async fn list(
        &self,
        user: UserId,
        with: Option<UserId>,
    ) -> Result<Vec<MessageView>, MessageQueryError> {
        let messages = self.messages.lock().unwrap();
        Ok(messages
            .iter()
            .filter(|m| match with {
                Some(other) => {
                    (m.sender_id == user && m.receiver_id == other)
                        || (m.sender_id == other && m.receiver_id == user)
                }
                None => m.involves(user),
            })
            .map(message_view_of)
            .collect())
    }

    async fn find(&self, message_id: Uuid) -> Result<Option<MessageView>, MessageQueryError> {
        Ok(self.get(message_id).as_ref().map(message_view_of))
    }

    async fn participant_pairs(
        &self,
        user: UserId,
    ) -> Result<Vec<(UserId, UserId)>, MessageQueryError> {
        let messages = self.messages.lock().unwrap();
        Ok(messages
            .iter()
            .filter(|m| m.involves(user))
            .map(|m| (m.sender_id, m.receiver_id))
            .collect())
    }
}
