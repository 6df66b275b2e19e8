use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::comment::application::ports::incoming::use_cases::GetSingleCommentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/comments/{comment_id}/")]
pub async fn get_comment_by_id_handler(
    _user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let comment_id = path.into_inner();

    match data.comment.get_single.execute(comment_id).await {
        Ok(view) => ApiResponse::success(view),
        Err(GetSingleCommentError::NotFound) => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Not found.")
        }
        Err(GetSingleCommentError::QueryError(e)) => {
            error!(comment_id = %comment_id, error = %e, "Fetching comment failed");
            ApiResponse::internal_error()
        }
    }
}
