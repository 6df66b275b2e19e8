use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::comment::application::ports::incoming::use_cases::{
    CreateCommentCommand, CreateCommentError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub post: Uuid,
    pub content: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/comments/")]
pub async fn create_comment_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateCommentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match CreateCommentCommand::new(user.user_id, dto.post, &dto.content) {
        Ok(command) => command,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.comment.create.execute(command).await {
        Ok(view) => {
            info!(comment_id = %view.id, post_id = %dto.post, user_id = %user.user_id, "Comment created");
            ApiResponse::created(view)
        }
        Err(err) => map_create_comment_error(err, dto.post),
    }
}

fn map_create_comment_error(err: CreateCommentError, post_id: Uuid) -> HttpResponse {
    match err {
        CreateCommentError::PostNotFound => {
            warn!(post_id = %post_id, "Comment on unknown post");
            ApiResponse::bad_request("INVALID_POST", "Invalid post - object does not exist.")
        }
        CreateCommentError::RepositoryError(e) => {
            error!(post_id = %post_id, error = %e, "Creating comment failed");
            ApiResponse::internal_error()
        }
    }
}
