use async_trait::async_trait;

use crate::auth::application::{domain::entities::UserProfile, ports::outgoing::UserQueryError};

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<UserProfile>, UserQueryError>;
}
