use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::application::domain::entities::AuthSession;
use crate::auth::application::use_cases::register_user::{
    RegisterUserCommand, RegisterUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Request body for user registration
#[derive(Deserialize, ToSchema)]
pub struct RegisterUserRequest {
    /// Letters, digits and @/./+/-/_ only
    #[schema(example = "johndoe")]
    pub username: String,

    /// Optional email address
    #[serde(default)]
    #[schema(example = "john@example.com")]
    pub email: String,

    #[serde(default)]
    #[schema(example = "John")]
    pub first_name: String,

    #[serde(default)]
    #[schema(example = "Doe")]
    pub last_name: String,

    /// At least 6 characters
    #[schema(example = "secret123")]
    pub password: String,

    /// Must repeat `password`
    #[schema(example = "secret123")]
    pub password2: String,
}

/// Register a new account
///
/// Creates the user and returns its profile together with a token pair.
#[utoipa::path(
    post,
    path = "/api/auth/register/",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = AuthSession),
        (
            status = 400,
            description = "Validation failed",
            body = ErrorResponse,
            example = json!({ "code": "VALIDATION_ERROR", "detail": "Passwords do not match." })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register/")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let command = match RegisterUserCommand::new(
        dto.username,
        dto.email,
        dto.first_name,
        dto.last_name,
        dto.password,
        dto.password2,
    ) {
        Ok(command) => command,
        Err(e) => {
            warn!(error = %e, "Invalid registration input");
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    let username = command.username().to_string();

    match data.register_user_use_case.execute(command).await {
        Ok(session) => {
            info!(user_id = %session.user.id, username = %username, "User registered");
            ApiResponse::created(session)
        }
        Err(err) => map_register_user_error(err, &username),
    }
}

fn map_register_user_error(err: RegisterUserError, username: &str) -> HttpResponse {
    match err {
        RegisterUserError::UsernameTaken => {
            warn!(username = %username, "Registration failed: username taken");
            ApiResponse::bad_request("USERNAME_TAKEN", "A user with that username already exists.")
        }
        RegisterUserError::HashingFailed(ref e)
        | RegisterUserError::TokenGenerationFailed(ref e)
        | RegisterUserError::RepositoryError(ref e) => {
            error!(username = %username, error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
