pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::comment;
pub use modules::media;
pub use modules::message;
pub use modules::post;
pub use modules::seed;

use actix_web::web;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::auth::application::use_cases::{
    fetch_profile::FetchUserProfileUseCase, list_users::ListUsersUseCase,
    login_user::ILoginUserUseCase, refresh_token::IRefreshTokenUseCase,
    register_user::IRegisterUserUseCase, search_users::SearchUsersUseCase,
    update_profile::UpdateUserProfileUseCase,
};
use crate::comment::application::comment_use_cases::CommentUseCases;
use crate::media::application::ports::outgoing::MediaStore;
use crate::message::application::message_use_cases::MessageUseCases;
use crate::post::application::post_use_cases::PostUseCases;
use crate::shared::api::{custom_json_config, custom_query_config};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    // Users & auth
    pub register_user_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub fetch_user_profile_use_case: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
    pub update_user_profile_use_case: Arc<dyn UpdateUserProfileUseCase + Send + Sync>,
    pub search_users_use_case: Arc<dyn SearchUsersUseCase + Send + Sync>,
    pub list_users_use_case: Arc<dyn ListUsersUseCase + Send + Sync>,

    pub post: PostUseCases,
    pub comment: CommentUseCases,
    pub message: MessageUseCases,

    pub media_store: Arc<dyn MediaStore + Send + Sync>,
}

/// Registers every route. Literal segments (`me`, `search`, `feed`,
/// `conversations`) go before the `{id}` routes that would shadow them.
#[cfg(not(tarpaulin_include))]
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::comment::adapter::incoming::web::routes as comment_routes;
    use crate::media::adapter::incoming::web::routes as media_routes;
    use crate::message::adapter::incoming::web::routes as message_routes;
    use crate::post::adapter::incoming::web::routes as post_routes;

    cfg.app_data(custom_json_config());
    cfg.app_data(custom_query_config());

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Media
    cfg.service(media_routes::get_media_handler);
    // Auth
    cfg.service(auth_routes::register_user_handler);
    cfg.service(auth_routes::login_user_handler);
    cfg.service(auth_routes::refresh_token_handler);
    // Users
    cfg.service(auth_routes::get_user_profile_handler);
    cfg.service(auth_routes::update_user_profile_handler);
    cfg.service(auth_routes::search_users_handler);
    cfg.service(auth_routes::list_users_handler);
    cfg.service(auth_routes::get_user_by_id_handler);
    // Posts
    cfg.service(post_routes::get_feed_handler);
    cfg.service(post_routes::get_posts_handler);
    cfg.service(post_routes::create_post_handler);
    cfg.service(post_routes::get_post_by_id_handler);
    cfg.service(post_routes::update_post_handler);
    cfg.service(post_routes::delete_post_handler);
    cfg.service(post_routes::toggle_like_handler);
    cfg.service(post_routes::add_comment_handler);
    // Comments
    cfg.service(comment_routes::get_comments_handler);
    cfg.service(comment_routes::create_comment_handler);
    cfg.service(comment_routes::get_comment_by_id_handler);
    cfg.service(comment_routes::update_comment_handler);
    cfg.service(comment_routes::delete_comment_handler);
    // Messages
    cfg.service(message_routes::get_conversations_handler);
    cfg.service(message_routes::get_messages_handler);
    cfg.service(message_routes::send_message_handler);
    cfg.service(message_routes::get_message_by_id_handler);
    cfg.service(message_routes::update_message_handler);
    cfg.service(message_routes::delete_message_handler);
    // Docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
