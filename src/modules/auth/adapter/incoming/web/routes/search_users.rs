use crate::{
    api::schemas::ErrorResponse,
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::domain::entities::UserSummary,
    },
    shared::api::ApiResponse,
    AppState,
};
use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

#[derive(Deserialize, IntoParams)]
pub struct SearchUsersQuery {
    /// Case-insensitive fragment of username, first or last name
    #[serde(default)]
    pub q: String,
}

/// Search users
///
/// Returns at most ten users other than the caller.
#[utoipa::path(
    get,
    path = "/api/users/search/",
    tag = "users",
    params(SearchUsersQuery),
    responses(
        (status = 200, description = "Matching users", body = [UserSummary]),
        (status = 401, description = "Missing or invalid access token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/api/users/search/")]
pub async fn search_users_handler(
    user: AuthenticatedUser,
    query: web::Query<SearchUsersQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.search_users_use_case.execute(user.user_id, &query.q).await {
        Ok(users) => ApiResponse::success(users),
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "User search failed");
            ApiResponse::internal_error()
        }
    }
}
