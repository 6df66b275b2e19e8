use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::message::application::ports::incoming::use_cases::{
    SendMessageCommand, SendMessageError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// `is_read` is not accepted here; new messages always start unread.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub receiver_id: Uuid,
    pub content: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/messages/")]
pub async fn send_message_handler(
    user: AuthenticatedUser,
    req: web::Json<SendMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let receiver = UserId::from(dto.receiver_id);

    let command = match SendMessageCommand::new(user.user_id, receiver, &dto.content) {
        Ok(command) => command,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.message.send.execute(command).await {
        Ok(view) => {
            info!(message_id = %view.id, sender_id = %user.user_id, receiver_id = %receiver, "Message sent");
            ApiResponse::created(view)
        }
        Err(err) => map_send_message_error(err, receiver),
    }
}

fn map_send_message_error(err: SendMessageError, receiver: UserId) -> HttpResponse {
    match err {
        SendMessageError::ReceiverNotFound => {
            warn!(receiver_id = %receiver, "Message to unknown receiver");
            ApiResponse::bad_request("INVALID_RECEIVER", &err.to_string())
        }
        SendMessageError::RepositoryError(e) => {
            error!(receiver_id = %receiver, error = %e, "Sending message failed");
            ApiResponse::internal_error()
        }
    }
}
