use actix_web::{route, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::message::application::ports::incoming::use_cases::{
    UpdateMessageCommand, UpdateMessageError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    pub content: String,
}

#[route("/api/messages/{message_id}/", method = "PUT", method = "PATCH")]
pub async fn update_message_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdateMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let message_id = path.into_inner();

    let command = match UpdateMessageCommand::new(user.user_id, message_id, &req.content) {
        Ok(command) => command,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.message.update.execute(command).await {
        Ok(view) => {
            info!(message_id = %message_id, user_id = %user.user_id, "Message edited");
            ApiResponse::success(view)
        }
        Err(err) => map_update_message_error(err, message_id),
    }
}

fn map_update_message_error(err: UpdateMessageError, message_id: Uuid) -> HttpResponse {
    match err {
        UpdateMessageError::NotFound => ApiResponse::not_found("MESSAGE_NOT_FOUND", "Not found."),
        UpdateMessageError::Forbidden => {
            warn!(message_id = %message_id, "Message edit by receiver");
            ApiResponse::forbidden("NOT_MESSAGE_SENDER", "Not your message.")
        }
        UpdateMessageError::RepositoryError(e) => {
            error!(message_id = %message_id, error = %e, "Editing message failed");
            ApiResponse::internal_error()
        }
    }
}
