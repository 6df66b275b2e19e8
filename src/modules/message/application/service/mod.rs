mod delete_message_service;
mod get_conversations_service;
mod get_messages_service;
mod get_single_message_service;
mod send_message_service;
mod update_message_service;

pub use delete_message_service::DeleteMessageService;
pub use get_conversations_service::GetConversationsService;
pub use get_messages_service::GetMessagesService;
pub use get_single_message_service::GetSingleMessageService;
pub use send_message_service::SendMessageService;
pub use update_message_service::UpdateMessageService;
