// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Error body returned by every endpoint
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "This field may not be blank.")]
    pub detail: String,
}
