// src/modules/media/adapter/incoming/web/routes/get_media.rs
use actix_web::{get, web, HttpResponse, Responder};

use crate::{media::application::ports::outgoing::MediaStoreError, shared::api::ApiResponse, AppState};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[get("/media/{path:.*}")]
pub async fn get_media_handler(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let path = path.into_inner();

    match data.media_store.load(&path).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            HttpResponse::Ok().content_type(mime.as_ref()).body(bytes)
        }
        Err(err) => map_get_media_error(&path, err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_get_media_error(path: &str, err: MediaStoreError) -> HttpResponse {
    match err {
        MediaStoreError::NotFound | MediaStoreError::InvalidPath => {
            ApiResponse::not_found("MEDIA_NOT_FOUND", "Media not found")
        }
        MediaStoreError::Storage(msg) => {
            tracing::error!(path = %path, error = %msg, "Failed to read media");
            ApiResponse::internal_error()
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
