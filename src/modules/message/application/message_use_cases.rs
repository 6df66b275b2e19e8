use std::sync::Arc;

use crate::message::application::ports::incoming::use_cases::{
    DeleteMessageUseCase, GetConversationsUseCase, GetMessagesUseCase, GetSingleMessageUseCase,
    SendMessageUseCase, UpdateMessageUseCase,
};

#[derive(Clone)]
pub struct MessageUseCases {
    pub send: Arc<dyn SendMessageUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetMessagesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleMessageUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateMessageUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteMessageUseCase + Send + Sync>,
    pub conversations: Arc<dyn GetConversationsUseCase + Send + Sync>,
}
