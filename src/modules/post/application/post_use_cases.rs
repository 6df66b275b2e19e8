use std::sync::Arc;

use crate::post::application::ports::incoming::use_cases::{
    CreatePostUseCase, DeletePostUseCase, GetFeedUseCase, GetPostsUseCase, GetSinglePostUseCase,
    ToggleLikeUseCase, UpdatePostUseCase,
};

#[derive(Clone)]
pub struct PostUseCases {
    pub create: Arc<dyn CreatePostUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetPostsUseCase + Send + Sync>,
    pub get_feed: Arc<dyn GetFeedUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSinglePostUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePostUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePostUseCase + Send + Sync>,
    pub toggle_like: Arc<dyn ToggleLikeUseCase + Send + Sync>,
}
