use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::auth::application::domain::entities::{UserId, UserSummary};
use crate::auth::application::ports::outgoing::UserQuery;
use crate::message::application::ports::incoming::use_cases::{
    GetConversationsError, GetConversationsUseCase,
};
use crate::message::application::ports::outgoing::MessageQuery;

pub struct GetConversationsService<Q, U>
where
    Q: MessageQuery,
    U: UserQuery,
{
    query: Q,
    users: U,
}

impl<Q, U> GetConversationsService<Q, U>
where
    Q: MessageQuery,
    U: UserQuery,
{
    pub fn new(query: Q, users: U) -> Self {
        Self { query, users }
    }
}

#[async_trait]
impl<Q, U> GetConversationsUseCase for GetConversationsService<Q, U>
where
    Q: MessageQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(&self, user: UserId) -> Result<Vec<UserSummary>, GetConversationsError> {
        // TODO: replace the full scan with a SELECT DISTINCT over both party columns.
        let pairs = self.query.participant_pairs(user).await?;

        let counterparts: BTreeSet<UserId> = pairs
            .into_iter()
            .flat_map(|(sender, receiver)| [sender, receiver])
            .filter(|id| *id != user)
            .collect();

        if counterparts.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<UserId> = counterparts.into_iter().collect();
        Ok(self.users.find_summaries(&ids).await?)
    }
}
