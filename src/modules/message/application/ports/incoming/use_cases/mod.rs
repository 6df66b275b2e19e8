mod delete_message;
mod get_conversations;
mod get_messages;
mod get_single_message;
mod send_message;
mod update_message;

pub use delete_message::{DeleteMessageError, DeleteMessageUseCase};
pub use get_conversations::{GetConversationsError, GetConversationsUseCase};
pub use get_messages::{GetMessagesError, GetMessagesUseCase};
pub use get_single_message::{GetSingleMessageError, GetSingleMessageUseCase};
pub use send_message::{SendMessageCommand, SendMessageError, SendMessageUseCase};
pub use update_message::{UpdateMessageCommand, UpdateMessageError, UpdateMessageUseCase};
