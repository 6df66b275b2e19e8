use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    SqlErr,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::likes::{ActiveModel, Column, Entity};
use crate::auth::application::domain::entities::UserId;
use crate::post::application::ports::outgoing::{LikeRepository, LikeRepositoryError};

#[derive(Clone)]
pub struct LikeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LikeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> LikeRepositoryError {
    LikeRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl LikeRepository for LikeRepositoryPostgres {
    async fn exists(&self, user_id: UserId, post_id: Uuid) -> Result<bool, LikeRepositoryError> {
        let count = Entity::find()
            .filter(Column::UserId.eq(user_id.value()))
            .filter(Column::PostId.eq(post_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn add(&self, user_id: UserId, post_id: Uuid) -> Result<(), LikeRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id.value()),
            post_id: Set(post_id),
            created_at: Set(Utc::now().fixed_offset()),
        };

        match Entity::insert(model).exec_without_returning(&*self.db).await {
            Ok(_) => Ok(()),
            // A concurrent toggle already inserted the pair.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => Ok(()),
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn remove(&self, user_id: UserId, post_id: Uuid) -> Result<(), LikeRepositoryError> {
        Entity::delete_many()
            .filter(Column::UserId.eq(user_id.value()))
            .filter(Column::PostId.eq(post_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn count(&self, post_id: Uuid) -> Result<u64, LikeRepositoryError> {
        Entity::find()
            .filter(Column::PostId.eq(post_id))
            .count(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::collections::BTreeMap;

    fn count_row(n: i64) -> BTreeMap<String, Value> {
        BTreeMap::from([("num_items".to_string(), Value::BigInt(Some(n)))])
    }

    #[tokio::test]
    async fn exists_and_count_read_num_items() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(1)]])
            .append_query_results(vec![vec![count_row(7)]])
            .into_connection();
        let repo = LikeRepositoryPostgres::new(Arc::new(db));

        assert!(repo
            .exists(UserId::from(Uuid::new_v4()), Uuid::new_v4())
            .await
            .unwrap());
        assert_eq!(repo.count(Uuid::new_v4()).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn add_and_remove_execute_statements() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
            ])
            .into_connection();
        let repo = LikeRepositoryPostgres::new(Arc::new(db));
        let (user, post) = (UserId::from(Uuid::new_v4()), Uuid::new_v4());

        repo.add(user, post).await.unwrap();
        repo.remove(user, post).await.unwrap();
    }

    #[tokio::test]
    async fn database_failure_is_reported() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Custom("connection lost".to_string())])
            .into_connection();

        let result = LikeRepositoryPostgres::new(Arc::new(db))
            .add(UserId::from(Uuid::new_v4()), Uuid::new_v4())
            .await;

        assert!(matches!(result, Err(LikeRepositoryError::DatabaseError(_))));
    }
}
