use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AuthSession, UserId, UserProfile, UserSummary};
use crate::auth::application::ports::outgoing::UserQueryError;
use crate::auth::application::use_cases::{
    fetch_profile::{FetchUserError, FetchUserProfileUseCase},
    list_users::ListUsersUseCase,
    login_user::{ILoginUserUseCase, LoginError, LoginRequest},
    refresh_token::{
        IRefreshTokenUseCase, RefreshTokenError, RefreshTokenRequest, RefreshTokenResponse,
    },
    register_user::{IRegisterUserUseCase, RegisterUserCommand, RegisterUserError},
    search_users::SearchUsersUseCase,
    update_profile::{UpdateUserError, UpdateUserInput, UpdateUserProfileUseCase},
};
use crate::comment::application::domain::CommentView;
use crate::comment::application::ports::incoming::use_cases::{
    CreateCommentCommand, CreateCommentError, CreateCommentUseCase, DeleteCommentError,
    DeleteCommentUseCase, GetCommentsError, GetCommentsUseCase, GetSingleCommentError,
    GetSingleCommentUseCase, UpdateCommentCommand, UpdateCommentError, UpdateCommentUseCase,
};
use crate::media::application::domain::ImageUpload;
use crate::media::application::ports::outgoing::{MediaStore, MediaStoreError};
use crate::message::application::domain::MessageView;
use crate::message::application::ports::incoming::use_cases::{
    DeleteMessageError, DeleteMessageUseCase, GetConversationsError, GetConversationsUseCase,
    GetMessagesError, GetMessagesUseCase, GetSingleMessageError, GetSingleMessageUseCase,
    SendMessageCommand, SendMessageError, SendMessageUseCase, UpdateMessageCommand,
    UpdateMessageError, UpdateMessageUseCase,
};
use crate::post::application::domain::{LikeToggle, PostView};
use crate::post::application::ports::incoming::use_cases::{
    CreatePostCommand, CreatePostError, CreatePostUseCase, DeletePostError, DeletePostUseCase,
    GetFeedUseCase, GetPostsError, GetPostsUseCase, GetSinglePostError, GetSinglePostUseCase,
    ToggleLikeError, ToggleLikeUseCase, UpdatePostCommand, UpdatePostError, UpdatePostUseCase,
};

// ────────────────────────────────────────────────────────────
// Media
// ────────────────────────────────────────────────────────────

/// Keeps files in memory. `save` returns `<folder>/<file_name>` unchanged.
#[derive(Clone, Default)]
pub struct StaticMediaStore {
    files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl StaticMediaStore {
    pub fn with_file(path: &str, bytes: Vec<u8>) -> Self {
        let store = Self::default();
        store
            .files
            .lock()
            .unwrap()
            .insert(path.to_string(), bytes);
        store
    }

    pub fn stored_paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.files.lock().unwrap().keys().cloned().collect();
        paths.sort();
        paths
    }
}

#[async_trait]
impl MediaStore for StaticMediaStore {
    async fn save(&self, folder: &str, upload: ImageUpload) -> Result<String, MediaStoreError> {
        let path = format!("{folder}/{}", upload.file_name());
        self.files
            .lock()
            .unwrap()
            .insert(path.clone(), upload.bytes().to_vec());
        Ok(path)
    }

    async fn load(&self, path: &str) -> Result<Vec<u8>, MediaStoreError> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or(MediaStoreError::NotFound)
    }
}

// ────────────────────────────────────────────────────────────
// Users & auth
// ────────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _command: RegisterUserCommand,
    ) -> Result<AuthSession, RegisterUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<AuthSession, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRefreshTokenUseCase;

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshTokenError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchUserProfileUseCase;

#[async_trait]
impl FetchUserProfileUseCase for StubFetchUserProfileUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<UserProfile, FetchUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateUserProfileUseCase;

#[async_trait]
impl UpdateUserProfileUseCase for StubUpdateUserProfileUseCase {
    async fn execute(&self, _data: UpdateUserInput) -> Result<UserProfile, UpdateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSearchUsersUseCase;

#[async_trait]
impl SearchUsersUseCase for StubSearchUsersUseCase {
    async fn execute(
        &self,
        _caller: UserId,
        _term: &str,
    ) -> Result<Vec<UserSummary>, UserQueryError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListUsersUseCase;

#[async_trait]
impl ListUsersUseCase for StubListUsersUseCase {
    async fn execute(&self) -> Result<Vec<UserProfile>, UserQueryError> {
        unimplemented!("Not used in this test")
    }
}

// ────────────────────────────────────────────────────────────
// Posts
// ────────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubCreatePostUseCase;

#[async_trait]
impl CreatePostUseCase for StubCreatePostUseCase {
    async fn execute(&self, _command: CreatePostCommand) -> Result<PostView, CreatePostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetPostsUseCase;

#[async_trait]
impl GetPostsUseCase for StubGetPostsUseCase {
    async fn execute(
        &self,
        _viewer: UserId,
        _author: Option<UserId>,
    ) -> Result<Vec<PostView>, GetPostsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetFeedUseCase;

#[async_trait]
impl GetFeedUseCase for StubGetFeedUseCase {
    async fn execute(&self, _viewer: UserId) -> Result<Vec<PostView>, GetPostsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSinglePostUseCase;

#[async_trait]
impl GetSinglePostUseCase for StubGetSinglePostUseCase {
    async fn execute(
        &self,
        _viewer: UserId,
        _post_id: Uuid,
    ) -> Result<PostView, GetSinglePostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdatePostUseCase;

#[async_trait]
impl UpdatePostUseCase for StubUpdatePostUseCase {
    async fn execute(&self, _command: UpdatePostCommand) -> Result<PostView, UpdatePostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeletePostUseCase;

#[async_trait]
impl DeletePostUseCase for StubDeletePostUseCase {
    async fn execute(&self, _requester: UserId, _post_id: Uuid) -> Result<(), DeletePostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubToggleLikeUseCase;

#[async_trait]
impl ToggleLikeUseCase for StubToggleLikeUseCase {
    async fn execute(
        &self,
        _user_id: UserId,
        _post_id: Uuid,
    ) -> Result<LikeToggle, ToggleLikeError> {
        unimplemented!("Not used in this test")
    }
}

// ────────────────────────────────────────────────────────────
// Comments
// ────────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubCreateCommentUseCase;

#[async_trait]
impl CreateCommentUseCase for StubCreateCommentUseCase {
    async fn execute(
        &self,
        _command: CreateCommentCommand,
    ) -> Result<CommentView, CreateCommentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetCommentsUseCase;

#[async_trait]
impl GetCommentsUseCase for StubGetCommentsUseCase {
    async fn execute(&self, _post_id: Option<Uuid>) -> Result<Vec<CommentView>, GetCommentsError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleCommentUseCase;

#[async_trait]
impl GetSingleCommentUseCase for StubGetSingleCommentUseCase {
    async fn execute(&self, _comment_id: Uuid) -> Result<CommentView, GetSingleCommentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateCommentUseCase;

#[async_trait]
impl UpdateCommentUseCase for StubUpdateCommentUseCase {
    async fn execute(
        &self,
        _command: UpdateCommentCommand,
    ) -> Result<CommentView, UpdateCommentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCommentUseCase;

#[async_trait]
impl DeleteCommentUseCase for StubDeleteCommentUseCase {
    async fn execute(
        &self,
        _requester: UserId,
        _comment_id: Uuid,
    ) -> Result<(), DeleteCommentError> {
        unimplemented!("Not used in this test")
    }
}

// ────────────────────────────────────────────────────────────
// Messages
// ────────────────────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubSendMessageUseCase;

#[async_trait]
impl SendMessageUseCase for StubSendMessageUseCase {
    async fn execute(&self, _command: SendMessageCommand) -> Result<MessageView, SendMessageError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetMessagesUseCase;

#[async_trait]
impl GetMessagesUseCase for StubGetMessagesUseCase {
    async fn execute(
        &self,
        _user: UserId,
        _with: Option<UserId>,
    ) -> Result<Vec<MessageView>, GetMessagesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleMessageUseCase;

#[async_trait]
impl GetSingleMessageUseCase for StubGetSingleMessageUseCase {
    async fn execute(
        &self,
        _user: UserId,
        _message_id: Uuid,
    ) -> Result<MessageView, GetSingleMessageError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateMessageUseCase;

#[async_trait]
impl UpdateMessageUseCase for StubUpdateMessageUseCase {
    async fn execute(
        &self,
        _command: UpdateMessageCommand,
    ) -> Result<MessageView, UpdateMessageError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteMessageUseCase;

#[async_trait]
impl DeleteMessageUseCase for StubDeleteMessageUseCase {
    async fn execute(&self, _user: UserId, _message_id: Uuid) -> Result<(), DeleteMessageError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetConversationsUseCase;

#[async_trait]
impl GetConversationsUseCase for StubGetConversationsUseCase {
    async fn execute(&self, _user: UserId) -> Result<Vec<UserSummary>, GetConversationsError> {
        unimplemented!("Not used in this test")
    }
}
