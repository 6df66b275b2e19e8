use crate::api::schemas::ErrorResponse;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, RefreshTokenRequestDto, RegisterUserRequest, UpdateUserRequest,
};
use crate::auth::application::domain::entities::{AuthSession, UserProfile, UserSummary};
use crate::auth::application::use_cases::refresh_token::RefreshTokenResponse;
use crate::media::application::domain::ImageUploadDto;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Social Network API",
        version = "1.0.0",
        description = "Users, friendships, posts, comments and direct messages",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::refresh_token_handler,

        // User endpoints
        crate::auth::adapter::incoming::web::routes::get_user_profile_handler,
        crate::auth::adapter::incoming::web::routes::update_user_profile_handler,
        crate::auth::adapter::incoming::web::routes::search_users_handler,
        crate::auth::adapter::incoming::web::routes::list_users_handler,
        crate::auth::adapter::incoming::web::routes::get_user_by_id_handler,
    ),
    components(
        schemas(
            ErrorResponse,

            // Auth DTOs
            RegisterUserRequest,
            LoginRequestDto,
            RefreshTokenRequestDto,
            RefreshTokenResponse,
            AuthSession,

            // User DTOs
            UpdateUserRequest,
            ImageUploadDto,
            UserProfile,
            UserSummary
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and token refresh"),
        (name = "users", description = "Profiles and user directory"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT access token"))
                        .build(),
                ),
            )
        }
    }
}
