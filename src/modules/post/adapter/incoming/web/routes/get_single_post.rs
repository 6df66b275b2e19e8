use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::post::application::ports::incoming::use_cases::GetSinglePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/posts/{post_id}/")]
pub async fn get_post_by_id_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.post.get_single.execute(user.user_id, post_id).await {
        Ok(view) => ApiResponse::success(view),
        Err(err) => map_get_single_post_error(err, post_id),
    }
}

fn map_get_single_post_error(err: GetSinglePostError, post_id: Uuid) -> HttpResponse {
    match err {
        GetSinglePostError::NotFound => ApiResponse::not_found("POST_NOT_FOUND", "Not found."),
        GetSinglePostError::QueryError(e) => {
            error!(post_id = %post_id, error = %e, "Fetching post failed");
            ApiResponse::internal_error()
        }
    }
}
