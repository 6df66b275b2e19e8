use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Mini users the caller has messaged with.
#[get("/api/messages/conversations/")]
pub async fn get_conversations_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.message.conversations.execute(user.user_id).await {
        Ok(users) => ApiResponse::success(users),
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Listing conversations failed");
            ApiResponse::internal_error()
        }
    }
}
