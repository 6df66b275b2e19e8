use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::domain::LikeToggle;
use crate::post::application::ports::incoming::use_cases::{ToggleLikeError, ToggleLikeUseCase};
use crate::post::application::ports::outgoing::{LikeRepository, PostRepository};

pub struct ToggleLikeService<P, L>
where
    P: PostRepository,
    L: LikeRepository,
{
    posts: P,
    likes: L,
}

impl<P, L> ToggleLikeService<P, L>
where
    P: PostRepository,
    L: LikeRepository,
{
    pub fn new(posts: P, likes: L) -> Self {
        Self { posts, likes }
    }
}

#[async_trait]
impl<P, L> ToggleLikeUseCase for ToggleLikeService<P, L>
where
    P: PostRepository + Send + Sync,
    L: LikeRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId, post_id: Uuid) -> Result<LikeToggle, ToggleLikeError> {
        if self.posts.find(post_id).await?.is_none() {
            return Err(ToggleLikeError::PostNotFound);
        }

        let liked = if self.likes.exists(user_id, post_id).await? {
            self.likes.remove(user_id, post_id).await?;
            false
        } else {
            self.likes.add(user_id, post_id).await?;
            true
        };

        let likes_count = self.likes.count(post_id).await?;

        Ok(LikeToggle { liked, likes_count })
    }
}
