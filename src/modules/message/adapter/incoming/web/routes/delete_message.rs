use actix_web::{delete, web, HttpResponse, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::message::application::ports::incoming::use_cases::DeleteMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/messages/{message_id}/")]
pub async fn delete_message_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let message_id = path.into_inner();

    match data.message.delete.execute(user.user_id, message_id).await {
        Ok(()) => {
            info!(message_id = %message_id, user_id = %user.user_id, "Message deleted");
            ApiResponse::no_content()
        }
        Err(err) => map_delete_message_error(err, message_id),
    }
}

fn map_delete_message_error(err: DeleteMessageError, message_id: Uuid) -> HttpResponse {
    match err {
        DeleteMessageError::NotFound => ApiResponse::not_found("MESSAGE_NOT_FOUND", "Not found."),
        DeleteMessageError::RepositoryError(e) => {
            error!(message_id = %message_id, error = %e, "Deleting message failed");
            ApiResponse::internal_error()
        }
    }
}
