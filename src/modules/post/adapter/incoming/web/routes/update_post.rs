use actix_web::{route, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::media::application::domain::{ImageUpload, ImageUploadDto};
use crate::post::application::ports::incoming::use_cases::{UpdatePostCommand, UpdatePostError};
use crate::post::application::ports::outgoing::PatchField;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// `image: null` removes the current image; an omitted field keeps it.
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub content: Option<String>,
    #[serde(default)]
    pub image: PatchField<ImageUploadDto>,
}

#[route("/api/posts/{post_id}/", method = "PUT", method = "PATCH")]
pub async fn update_post_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<UpdatePostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();
    let dto = req.into_inner();

    let image = match dto.image {
        PatchField::Unset => PatchField::Unset,
        PatchField::Null => PatchField::Null,
        PatchField::Value(upload) => match ImageUpload::try_from(upload) {
            Ok(image) => PatchField::Value(image),
            Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        },
    };

    let command = UpdatePostCommand {
        editor: user.user_id,
        post_id,
        content: dto.content,
        image,
    };

    match data.post.update.execute(command).await {
        Ok(view) => {
            info!(post_id = %post_id, user_id = %user.user_id, "Post updated");
            ApiResponse::success(view)
        }
        Err(err) => map_update_post_error(err, post_id),
    }
}

fn map_update_post_error(err: UpdatePostError, post_id: Uuid) -> HttpResponse {
    match err {
        UpdatePostError::NotFound => ApiResponse::not_found("POST_NOT_FOUND", "Not found."),
        UpdatePostError::Forbidden => {
            warn!(post_id = %post_id, "Post edit by non-author");
            ApiResponse::forbidden("NOT_POST_AUTHOR", "Not your post.")
        }
        UpdatePostError::EmptyPost => ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string()),
        UpdatePostError::StorageFailed(ref e) | UpdatePostError::RepositoryError(ref e) => {
            error!(post_id = %post_id, error = %e, "Updating post failed");
            ApiResponse::internal_error()
        }
    }
}
