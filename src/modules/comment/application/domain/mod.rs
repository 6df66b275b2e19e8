pub mod entities;

pub use entities::{validate_comment_content, Comment, CommentValidationError, CommentView};
