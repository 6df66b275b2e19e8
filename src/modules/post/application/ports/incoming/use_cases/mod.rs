mod create_post;
mod delete_post;
mod get_feed;
mod get_posts;
mod get_single_post;
mod toggle_like;
mod update_post;

pub use create_post::{CreatePostCommand, CreatePostError, CreatePostUseCase};
pub use delete_post::{DeletePostError, DeletePostUseCase};
pub use get_feed::GetFeedUseCase;
pub use get_posts::{GetPostsError, GetPostsUseCase};
pub use get_single_post::{GetSinglePostError, GetSinglePostUseCase};
pub use toggle_like::{ToggleLikeError, ToggleLikeUseCase};
pub use update_post::{UpdatePostCommand, UpdatePostError, UpdatePostUseCase};
