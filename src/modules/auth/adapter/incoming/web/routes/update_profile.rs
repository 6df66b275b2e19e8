use crate::{
    api::schemas::ErrorResponse,
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::{
            domain::entities::UserProfile,
            use_cases::update_profile::{UpdateUserError, UpdateUserInput},
        },
    },
    media::application::domain::{ImageUpload, ImageUploadDto},
    shared::api::ApiResponse,
    AppState,
};
use actix_web::{patch, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Partial profile update; omitted fields keep their current value.
#[derive(Deserialize, ToSchema, Default)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    /// New password, re-hashed before storage
    pub password: Option<String>,
    pub avatar: Option<ImageUploadDto>,
}

/// Update the caller's profile
#[utoipa::path(
    patch,
    path = "/api/users/me/",
    tag = "users",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated profile", body = UserProfile),
        (
            status = 400,
            description = "Validation failed or username taken",
            body = ErrorResponse,
            example = json!({ "code": "USERNAME_TAKEN", "detail": "A user with that username already exists." })
        ),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[patch("/api/users/me/")]
pub async fn update_user_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateUserRequest>,
    app_data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let avatar = match dto.avatar.map(ImageUpload::try_from).transpose() {
        Ok(avatar) => avatar,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    let input = match UpdateUserInput::new(
        user.user_id,
        dto.username,
        dto.email,
        dto.first_name,
        dto.last_name,
        dto.bio,
        dto.password,
        avatar,
    ) {
        Ok(input) => input,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match app_data.update_user_profile_use_case.execute(input).await {
        Ok(profile) => {
            info!(user_id = %user.user_id, "Profile updated");
            ApiResponse::success(profile)
        }
        Err(err) => map_update_user_error(err),
    }
}

fn map_update_user_error(err: UpdateUserError) -> HttpResponse {
    match err {
        UpdateUserError::UsernameTaken => {
            warn!("Profile update rejected: username taken");
            ApiResponse::bad_request("USERNAME_TAKEN", &err.to_string())
        }
        UpdateUserError::UserNotFound => ApiResponse::not_found("USER_NOT_FOUND", "Not found."),
        UpdateUserError::HashingFailed(_)
        | UpdateUserError::StorageFailed(_)
        | UpdateUserError::RepositoryError(_)
        | UpdateUserError::QueryError(_) => {
            error!(error = %err, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}
