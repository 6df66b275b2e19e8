use crate::api::schemas::ErrorResponse;
use crate::auth::application::use_cases::refresh_token::{
    RefreshTokenError, RefreshTokenRequest, RefreshTokenResponse,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use utoipa::ToSchema;

use tracing::{error, info, warn};

#[derive(Deserialize, ToSchema)]
pub struct RefreshTokenRequestDto {
    /// Refresh token obtained at login or registration
    pub refresh: String,
}

/// Refresh access token
///
/// Exchanges a valid refresh token for a fresh access token.
#[utoipa::path(
    post,
    path = "/api/auth/token/refresh/",
    tag = "auth",
    request_body = RefreshTokenRequestDto,
    responses(
        (status = 200, description = "New access token", body = RefreshTokenResponse),
        (status = 400, description = "Refresh token missing", body = ErrorResponse),
        (
            status = 401,
            description = "Refresh token invalid or expired",
            body = ErrorResponse,
            example = json!({ "code": "TOKEN_EXPIRED", "detail": "Refresh token has expired" })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/token/refresh/")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshTokenRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!("Token refresh attempt");

    let request = match RefreshTokenRequest::new(req.into_inner().refresh) {
        Ok(request) => request,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.refresh_token_use_case.execute(request).await {
        Ok(response) => {
            info!("Token refreshed successfully");
            ApiResponse::success(response)
        }
        Err(err) => map_refresh_error(err),
    }
}

fn map_refresh_error(err: RefreshTokenError) -> HttpResponse {
    match err {
        RefreshTokenError::TokenExpired => {
            warn!("Token refresh failed: token expired");
            ApiResponse::unauthorized("TOKEN_EXPIRED", &err.to_string())
        }
        RefreshTokenError::TokenInvalid => {
            warn!("Token refresh failed: invalid token");
            ApiResponse::unauthorized("INVALID_TOKEN", &err.to_string())
        }
        RefreshTokenError::InvalidTokenType => {
            warn!("Token refresh failed: wrong token type");
            ApiResponse::unauthorized("INVALID_TOKEN_TYPE", &err.to_string())
        }
        RefreshTokenError::TokenGenerationFailed(ref e) => {
            error!(error = %e, "Token generation failed during refresh");
            ApiResponse::internal_error()
        }
    }
}
