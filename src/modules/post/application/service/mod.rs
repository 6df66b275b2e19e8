mod create_post_service;
mod delete_post_service;
mod get_posts_service;
mod get_single_post_service;
mod toggle_like_service;
mod update_post_service;

pub use create_post_service::CreatePostService;
pub use delete_post_service::DeletePostService;
pub use get_posts_service::{GetFeedService, GetPostsService};
pub use get_single_post_service::GetSinglePostService;
pub use toggle_like_service::ToggleLikeService;
pub use update_post_service::UpdatePostService;
