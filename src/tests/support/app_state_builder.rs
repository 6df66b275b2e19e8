use crate::auth::application::use_cases::{
    fetch_profile::FetchUserProfileUseCase, list_users::ListUsersUseCase,
    login_user::ILoginUserUseCase, refresh_token::IRefreshTokenUseCase,
    register_user::IRegisterUserUseCase, search_users::SearchUsersUseCase,
    update_profile::UpdateUserProfileUseCase,
};
use crate::comment::application::comment_use_cases::CommentUseCases;
use crate::comment::application::ports::incoming::use_cases::{
    CreateCommentUseCase, DeleteCommentUseCase, GetCommentsUseCase, GetSingleCommentUseCase,
    UpdateCommentUseCase,
};
use crate::media::application::ports::outgoing::MediaStore;
use crate::message::application::message_use_cases::MessageUseCases;
use crate::message::application::ports::incoming::use_cases::{
    DeleteMessageUseCase, GetConversationsUseCase, GetMessagesUseCase, GetSingleMessageUseCase,
    SendMessageUseCase, UpdateMessageUseCase,
};
use crate::post::application::ports::incoming::use_cases::{
    CreatePostUseCase, DeletePostUseCase, GetFeedUseCase, GetPostsUseCase, GetSinglePostUseCase,
    ToggleLikeUseCase, UpdatePostUseCase,
};
use crate::post::application::post_use_cases::PostUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Every use case defaults to a stub that panics when called; tests swap in
/// the ones they exercise.
pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    refresh_token: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    fetch_user_profile: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
    update_user_profile: Arc<dyn UpdateUserProfileUseCase + Send + Sync>,
    search_users: Arc<dyn SearchUsersUseCase + Send + Sync>,
    list_users: Arc<dyn ListUsersUseCase + Send + Sync>,
    post: PostUseCases,
    comment: CommentUseCases,
    message: MessageUseCases,
    media_store: Arc<dyn MediaStore + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            refresh_token: Arc::new(StubRefreshTokenUseCase),
            fetch_user_profile: Arc::new(StubFetchUserProfileUseCase),
            update_user_profile: Arc::new(StubUpdateUserProfileUseCase),
            search_users: Arc::new(StubSearchUsersUseCase),
            list_users: Arc::new(StubListUsersUseCase),
            post: PostUseCases {
                create: Arc::new(StubCreatePostUseCase),
                get_list: Arc::new(StubGetPostsUseCase),
                get_feed: Arc::new(StubGetFeedUseCase),
                get_single: Arc::new(StubGetSinglePostUseCase),
                update: Arc::new(StubUpdatePostUseCase),
                delete: Arc::new(StubDeletePostUseCase),
                toggle_like: Arc::new(StubToggleLikeUseCase),
            },
            comment: CommentUseCases {
                create: Arc::new(StubCreateCommentUseCase),
                get_list: Arc::new(StubGetCommentsUseCase),
                get_single: Arc::new(StubGetSingleCommentUseCase),
                update: Arc::new(StubUpdateCommentUseCase),
                delete: Arc::new(StubDeleteCommentUseCase),
            },
            message: MessageUseCases {
                send: Arc::new(StubSendMessageUseCase),
                get_list: Arc::new(StubGetMessagesUseCase),
                get_single: Arc::new(StubGetSingleMessageUseCase),
                update: Arc::new(StubUpdateMessageUseCase),
                delete: Arc::new(StubDeleteMessageUseCase),
                conversations: Arc::new(StubGetConversationsUseCase),
            },
            media_store: Arc::new(StaticMediaStore::default()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl IRefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.refresh_token = Arc::new(uc);
        self
    }

    pub fn with_fetch_user_profile(
        mut self,
        uc: impl FetchUserProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_user_profile = Arc::new(uc);
        self
    }

    pub fn with_update_user_profile(
        mut self,
        uc: impl UpdateUserProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.update_user_profile = Arc::new(uc);
        self
    }

    pub fn with_search_users(
        mut self,
        uc: impl SearchUsersUseCase + Send + Sync + 'static,
    ) -> Self {
        self.search_users = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl ListUsersUseCase + Send + Sync + 'static) -> Self {
        self.list_users = Arc::new(uc);
        self
    }

    // Posts

    pub fn with_create_post(mut self, uc: impl CreatePostUseCase + Send + Sync + 'static) -> Self {
        self.post.create = Arc::new(uc);
        self
    }

    pub fn with_get_posts(mut self, uc: impl GetPostsUseCase + Send + Sync + 'static) -> Self {
        self.post.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_feed(mut self, uc: impl GetFeedUseCase + Send + Sync + 'static) -> Self {
        self.post.get_feed = Arc::new(uc);
        self
    }

    pub fn with_get_single_post(
        mut self,
        uc: impl GetSinglePostUseCase + Send + Sync + 'static,
    ) -> Self {
        self.post.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_post(mut self, uc: impl UpdatePostUseCase + Send + Sync + 'static) -> Self {
        self.post.update = Arc::new(uc);
        self
    }

    pub fn with_delete_post(mut self, uc: impl DeletePostUseCase + Send + Sync + 'static) -> Self {
        self.post.delete = Arc::new(uc);
        self
    }

    pub fn with_toggle_like(mut self, uc: impl ToggleLikeUseCase + Send + Sync + 'static) -> Self {
        self.post.toggle_like = Arc::new(uc);
        self
    }

    // Comments

    pub fn with_create_comment(
        mut self,
        uc: impl CreateCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.comment.create = Arc::new(uc);
        self
    }

    pub fn with_get_comments(
        mut self,
        uc: impl GetCommentsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.comment.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_comment(
        mut self,
        uc: impl GetSingleCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.comment.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_comment(
        mut self,
        uc: impl UpdateCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.comment.update = Arc::new(uc);
        self
    }

    pub fn with_delete_comment(
        mut self,
        uc: impl DeleteCommentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.comment.delete = Arc::new(uc);
        self
    }

    // Messages

    pub fn with_send_message(
        mut self,
        uc: impl SendMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.message.send = Arc::new(uc);
        self
    }

    pub fn with_get_messages(
        mut self,
        uc: impl GetMessagesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.message.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_message(
        mut self,
        uc: impl GetSingleMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.message.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_message(
        mut self,
        uc: impl UpdateMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.message.update = Arc::new(uc);
        self
    }

    pub fn with_delete_message(
        mut self,
        uc: impl DeleteMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.message.delete = Arc::new(uc);
        self
    }

    pub fn with_get_conversations(
        mut self,
        uc: impl GetConversationsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.message.conversations = Arc::new(uc);
        self
    }

    pub fn with_media_store(mut self, store: impl MediaStore + 'static) -> Self {
        self.media_store = Arc::new(store);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            refresh_token_use_case: self.refresh_token,
            fetch_user_profile_use_case: self.fetch_user_profile,
            update_user_profile_use_case: self.update_user_profile,
            search_users_use_case: self.search_users,
            list_users_use_case: self.list_users,
            post: self.post,
            comment: self.comment,
            message: self.message,
            media_store: self.media_store,
        })
    }
}
