use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::message::application::ports::incoming::use_cases::GetSingleMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/messages/{message_id}/")]
pub async fn get_message_by_id_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let message_id = path.into_inner();

    match data.message.get_single.execute(user.user_id, message_id).await {
        Ok(view) => ApiResponse::success(view),
        Err(err) => map_get_single_message_error(err, message_id),
    }
}

fn map_get_single_message_error(err: GetSingleMessageError, message_id: Uuid) -> HttpResponse {
    match err {
        GetSingleMessageError::NotFound => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Not found.")
        }
        GetSingleMessageError::QueryError(e) => {
            error!(message_id = %message_id, error = %e, "Fetching message failed");
            ApiResponse::internal_error()
        }
    }
}
