mod create_comment;
mod delete_comment;
mod get_comments;
mod get_single_comment;
mod update_comment;

pub use create_comment::create_comment_handler;
pub use delete_comment::delete_comment_handler;
pub use get_comments::get_comments_handler;
pub use get_single_comment::get_comment_by_id_handler;
pub use update_comment::update_comment_handler;
