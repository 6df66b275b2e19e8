use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::message::application::domain::MessageView;
use crate::message::application::ports::incoming::use_cases::{
    GetSingleMessageError, GetSingleMessageUseCase,
};
use crate::message::application::ports::outgoing::MessageQuery;

pub struct GetSingleMessageService<Q>
where
    Q: MessageQuery,
{
    query: Q,
}

impl<Q> GetSingleMessageService<Q>
where
    Q: MessageQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleMessageUseCase for GetSingleMessageService<Q>
where
    Q: MessageQuery + Send + Sync,
{
    async fn execute(
        &self,
        user: UserId,
        message_id: Uuid,
    ) -> Result<MessageView, GetSingleMessageError> {
        self.query
            .find(message_id)
            .await?
            .filter(|view| view.involves(user))
            .ok_or(GetSingleMessageError::NotFound)
    }
}
