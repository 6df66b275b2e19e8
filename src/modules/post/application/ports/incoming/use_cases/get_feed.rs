use async_trait::async_trait;

use super::get_posts::GetPostsError;
use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::PostView;

/// Every post, newest first, rendered for the viewer.
#[async_trait]
pub trait GetFeedUseCase: Send + Sync {
    async fn execute(&self, viewer: UserId) -> Result<Vec<PostView>, GetPostsError>;
}
