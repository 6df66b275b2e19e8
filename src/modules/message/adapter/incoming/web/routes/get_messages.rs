use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::message::application::ports::incoming::use_cases::GetMessagesError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct MessagesQuery {
    /// Other party of the conversation
    pub with: Option<Uuid>,
}

#[get("/api/messages/")]
pub async fn get_messages_handler(
    user: AuthenticatedUser,
    query: web::Query<MessagesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let with = query.with.map(UserId::from);

    match data.message.get_list.execute(user.user_id, with).await {
        Ok(messages) => ApiResponse::success(messages),
        Err(err) => map_get_messages_error(err, user.user_id),
    }
}

fn map_get_messages_error(err: GetMessagesError, user_id: UserId) -> HttpResponse {
    match err {
        GetMessagesError::QueryError(e) => {
            error!(user_id = %user_id, error = %e, "Listing messages failed");
            ApiResponse::internal_error()
        }
    }
}
