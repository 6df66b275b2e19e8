use actix_web::{route, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::comment::application::ports::incoming::use_cases::{
    UpdateCommentCommand, UpdateCommentError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateCommentRequest {
    pub content: String,
}

#[route("/api/comments/{comment_id}/", method = "PUT", method = "PATCH")]
pub async fn update_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateCommentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let comment_id = path.into_inner();

    let command = match UpdateCommentCommand::new(user.user_id, comment_id, &req.content) {
        Ok(command) => command,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.comment.update.execute(command).await {
        Ok(view) => {
            info!(comment_id = %comment_id, user_id = %user.user_id, "Comment updated");
            ApiResponse::success(view)
        }
        Err(err) => map_update_comment_error(err, comment_id),
    }
}

fn map_update_comment_error(err: UpdateCommentError, comment_id: Uuid) -> HttpResponse {
    match err {
        UpdateCommentError::NotFound => ApiResponse::not_found("COMMENT_NOT_FOUND", "Not found."),
        UpdateCommentError::Forbidden => {
            warn!(comment_id = %comment_id, "Comment edit by non-author");
            ApiResponse::forbidden("NOT_COMMENT_AUTHOR", "Not your comment.")
        }
        UpdateCommentError::RepositoryError(e) => {
            error!(comment_id = %comment_id, error = %e, "Updating comment failed");
            ApiResponse::internal_error()
        }
    }
}
