mod delete_message;
mod get_conversations;
mod get_messages;
mod get_single_message;
mod send_message;
mod update_message;

pub use delete_message::delete_message_handler;
pub use get_conversations::get_conversations_handler;
pub use get_messages::get_messages_handler;
pub use get_single_message::get_message_by_id_handler;
pub use send_message::send_message_handler;
pub use update_message::update_message_handler;
