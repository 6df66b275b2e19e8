use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserSummary};

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn involves(&self, user_id: UserId) -> bool {
        self.sender_id == user_id || self.receiver_id == user_id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MessageView {
    pub id: Uuid,
    pub sender: UserSummary,
    pub receiver: UserSummary,
    pub content: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl MessageView {
    pub fn involves(&self, user_id: UserId) -> bool {
        let id = user_id.value();
        self.sender.id == id || self.receiver.id == id
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MessageValidationError {
    #[error("This field may not be blank.")]
    EmptyContent,
}

pub fn validate_message_content(content: &str) -> Result<String, MessageValidationError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(MessageValidationError::EmptyContent);
    }
    Ok(trimmed.to_string())
}
