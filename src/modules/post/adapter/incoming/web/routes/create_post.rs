use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info};

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::media::application::domain::{ImageUpload, ImageUploadDto};
use crate::post::application::ports::incoming::use_cases::{CreatePostCommand, CreatePostError};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub content: String,
    pub image: Option<ImageUploadDto>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/posts/")]
pub async fn create_post_handler(
    user: AuthenticatedUser,
    req: web::Json<CreatePostRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let image = match dto.image.map(ImageUpload::try_from).transpose() {
        Ok(image) => image,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    let command = match CreatePostCommand::new(user.user_id, &dto.content, image) {
        Ok(command) => command,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.post.create.execute(command).await {
        Ok(view) => {
            info!(post_id = %view.id, user_id = %user.user_id, "Post created");
            ApiResponse::created(view)
        }
        Err(err) => map_create_post_error(err),
    }
}

fn map_create_post_error(err: CreatePostError) -> HttpResponse {
    match err {
        CreatePostError::StorageFailed(ref e) | CreatePostError::RepositoryError(ref e) => {
            error!(error = %e, "Creating post failed");
            ApiResponse::internal_error()
        }
    }
}
