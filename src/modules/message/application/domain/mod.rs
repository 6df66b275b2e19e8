pub mod entities;

pub use entities::{validate_message_content, Message, MessageValidationError, MessageView};
