use std::sync::Arc;

use actix_web::web;

use crate::auth::adapter::outgoing::jwt::JwtConfig;
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::tests::support::user_fixtures::FakeTokenProvider;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        issuer: "test-issuer".to_string(),
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
    }
}

/// App data for the `AuthenticatedUser` extractor, backed by `FakeTokenProvider`.
pub fn fake_token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    web::Data::new(Arc::new(FakeTokenProvider) as Arc<dyn TokenProvider + Send + Sync>)
}
