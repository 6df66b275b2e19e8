use crate::{
    api::schemas::ErrorResponse,
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::{
            domain::entities::{UserId, UserProfile},
            use_cases::fetch_profile::FetchUserError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};
use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

/// Current user's profile
#[utoipa::path(
    get,
    path = "/api/users/me/",
    tag = "users",
    responses(
        (status = 200, description = "Profile of the caller", body = UserProfile),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "User no longer exists", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/users/me/")]
pub async fn get_user_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    fetch(&data, user.user_id).await
}

/// Retrieve another user's profile
#[utoipa::path(
    get,
    path = "/api/users/{id}/",
    tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "User profile", body = UserProfile),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/users/{id}/")]
pub async fn get_user_by_id_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    fetch(&data, UserId::from(path.into_inner())).await
}

async fn fetch(data: &AppState, user_id: UserId) -> HttpResponse {
    match data.fetch_user_profile_use_case.execute(user_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(err) => map_fetch_user_error(err),
    }
}

fn map_fetch_user_error(err: FetchUserError) -> HttpResponse {
    match err {
        FetchUserError::UserNotFound(_) => ApiResponse::not_found("USER_NOT_FOUND", "Not found."),
        FetchUserError::QueryError(e) => {
            error!(error = %e, "Database error fetching user profile");
            ApiResponse::internal_error()
        }
    }
}
