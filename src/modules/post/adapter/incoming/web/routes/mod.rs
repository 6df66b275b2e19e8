mod add_comment;
mod create_post;
mod delete_post;
mod get_posts;
mod get_single_post;
mod toggle_like;
mod update_post;

pub use add_comment::add_comment_handler;
pub use create_post::create_post_handler;
pub use delete_post::delete_post_handler;
pub use get_posts::{get_feed_handler, get_posts_handler};
pub use get_single_post::get_post_by_id_handler;
pub use toggle_like::toggle_like_handler;
pub use update_post::update_post_handler;
