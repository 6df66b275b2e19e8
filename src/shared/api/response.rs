// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Body of every non-2xx response.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ApiError {
    pub code: String,
    pub detail: String,
}

/// Response builders shared by every handler.
///
/// Successful payloads are serialized as-is; failures always use the
/// `{"code", "detail"}` shape of [`ApiError`].
pub struct ApiResponse;

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn error(status: StatusCode, code: &str, detail: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiError {
            code: code.to_string(),
            detail: detail.to_string(),
        })
    }

    pub fn not_found(code: &str, detail: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, detail)
    }

    pub fn bad_request(code: &str, detail: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, detail)
    }

    pub fn forbidden(code: &str, detail: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, code, detail)
    }

    pub fn unauthorized(code: &str, detail: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, detail)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
