use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CommentsFilter {
    pub post: Option<Uuid>,
}

#[get("/api/comments/")]
pub async fn get_comments_handler(
    _user: AuthenticatedUser,
    filter: web::Query<CommentsFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.comment.get_list.execute(filter.post).await {
        Ok(comments) => ApiResponse::success(comments),
        Err(e) => {
            error!(error = %e, "Listing comments failed");
            ApiResponse::internal_error()
        }
    }
}
