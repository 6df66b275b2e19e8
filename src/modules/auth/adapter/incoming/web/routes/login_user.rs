use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::entities::AuthSession;
use crate::auth::application::use_cases::login_user::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};

use utoipa::ToSchema;

/// Login request from client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "johndoe")]
    pub username: String,

    #[schema(example = "secret123")]
    pub password: String,
}

/// User login
///
/// Authenticates a user with username and password, returns the profile with a token pair.
#[utoipa::path(
    post,
    path = "/api/auth/login/",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = AuthSession),
        (
            status = 400,
            description = "Missing username or password",
            body = ErrorResponse,
            example = json!({ "code": "VALIDATION_ERROR", "detail": "Username cannot be empty" })
        ),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({ "code": "INVALID_CREDENTIALS", "detail": "Invalid credentials." })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login/")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, "Login attempt");

    let request = match LoginRequest::new(dto.username, dto.password) {
        Ok(req) => req,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };
    let username = request.username().to_string();

    match data.login_user_use_case.execute(request).await {
        Ok(session) => {
            info!(user_id = %session.user.id, username = %username, "User logged in");
            ApiResponse::success(session)
        }
        Err(err) => map_login_error(err, &username),
    }
}

fn map_login_error(err: LoginError, username: &str) -> HttpResponse {
    match err {
        LoginError::InvalidCredentials => {
            warn!(username = %username, "Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid credentials.")
        }
        LoginError::PasswordVerificationFailed(ref e)
        | LoginError::TokenGenerationFailed(ref e)
        | LoginError::QueryError(ref e) => {
            error!(username = %username, error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
