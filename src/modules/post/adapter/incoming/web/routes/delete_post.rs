use actix_web::{delete, web, HttpResponse, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::post::application::ports::incoming::use_cases::DeletePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/posts/{post_id}/")]
pub async fn delete_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.post.delete.execute(user.user_id, post_id).await {
        Ok(()) => {
            info!(post_id = %post_id, user_id = %user.user_id, "Post deleted");
            ApiResponse::no_content()
        }
        Err(err) => map_delete_post_error(err, post_id),
    }
}

fn map_delete_post_error(err: DeletePostError, post_id: Uuid) -> HttpResponse {
    match err {
        DeletePostError::NotFound => ApiResponse::not_found("POST_NOT_FOUND", "Not found."),
        DeletePostError::Forbidden => {
            warn!(post_id = %post_id, "Post delete by non-author");
            ApiResponse::forbidden("NOT_POST_AUTHOR", "Not your post.")
        }
        DeletePostError::RepositoryError(e) => {
            error!(post_id = %post_id, error = %e, "Deleting post failed");
            ApiResponse::internal_error()
        }
    }
}
