use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::message::application::domain::MessageView;
use crate::message::application::ports::incoming::use_cases::{
    GetMessagesError, GetMessagesUseCase,
};
use crate::message::application::ports::outgoing::MessageQuery;

pub struct GetMessagesService<Q>
where
    Q: MessageQuery,
{
    query: Q,
}

impl<Q> GetMessagesService<Q>
where
    Q: MessageQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMessagesUseCase for GetMessagesService<Q>
where
    Q: MessageQuery + Send + Sync,
{
    async fn execute(
        &self,
        user: UserId,
        with: Option<UserId>,
    ) -> Result<Vec<MessageView>, GetMessagesError> {
        Ok(self.query.list(user, with).await?)
    }
}
