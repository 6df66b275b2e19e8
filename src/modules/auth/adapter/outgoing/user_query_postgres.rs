use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use std::sync::Arc;

use super::sea_orm_entity::friendships::{Column as FriendshipColumn, Entity as FriendshipEntity};
use super::sea_orm_entity::users::{summaries_by_id, Column as UserColumn, Entity as UserEntity};
use crate::auth::application::domain::entities::{User, UserId, UserSummary};
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Escapes LIKE wildcards so the term matches literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

fn db_error(e: sea_orm::DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(user.map(|m| m.to_domain()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(user.map(|m| m.to_domain()))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserQueryError> {
        let users = UserEntity::find()
            .order_by_asc(UserColumn::Username)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(users.iter().map(|m| m.to_domain()).collect())
    }

    async fn search(
        &self,
        term: &str,
        exclude: UserId,
        limit: u64,
    ) -> Result<Vec<UserSummary>, UserQueryError> {
        let pattern = like_pattern(term);

        let users = UserEntity::find()
            .filter(UserColumn::Id.ne(exclude.value()))
            .filter(
                Condition::any()
                    .add(Expr::col(UserColumn::Username).ilike(&pattern))
                    .add(Expr::col(UserColumn::FirstName).ilike(&pattern))
                    .add(Expr::col(UserColumn::LastName).ilike(&pattern)),
            )
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(db_error)?;

        Ok(users.iter().map(|m| m.to_summary()).collect())
    }

    async fn find_summaries(&self, ids: &[UserId]) -> Result<Vec<UserSummary>, UserQueryError> {
        let mut summaries: Vec<UserSummary> =
            summaries_by_id(&*self.db, ids.iter().map(UserId::value))
                .await
                .map_err(db_error)?
                .into_values()
                .collect();
        summaries.sort_by(|a, b| a.username.cmp(&b.username));

        Ok(summaries)
    }

    async fn count_friends(&self, user_id: UserId) -> Result<u64, UserQueryError> {
        FriendshipEntity::find()
            .filter(FriendshipColumn::UserId.eq(user_id.value()))
            .count(&*self.db)
            .await
            .map_err(db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use chrono::Utc;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr, Transaction};
    use std::collections::BTreeMap;
    use uuid::Uuid;

    fn user_model(username: &str) -> UserModel {
        let now = Utc::now().fixed_offset();
        UserModel {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "hash".to_string(),
            first_name: "First".to_string(),
            last_name: "Last".to_string(),
            bio: String::new(),
            avatar: Some("avatars/x.png".to_string()),
            is_superuser: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("a%b_c"), "%a\\%b\\_c%");
    }

    #[tokio::test]
    async fn find_by_username_maps_model() {
        let model = user_model("alice");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let user = UserQueryPostgres::new(Arc::new(db))
            .find_by_username("alice")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.id, model.id);
        assert_eq!(user.avatar.as_deref(), Some("avatars/x.png"));
    }

    #[tokio::test]
    async fn find_by_id_returns_none_for_empty_result() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let user = UserQueryPostgres::new(Arc::new(db))
            .find_by_id(UserId::from(Uuid::new_v4()))
            .await
            .unwrap();

        assert!(user.is_none());
    }

    #[tokio::test]
    async fn search_returns_summaries_with_avatar_urls() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model("alicia")]])
            .into_connection();

        let found = UserQueryPostgres::new(Arc::new(db))
            .search("ali", UserId::from(Uuid::new_v4()), 10)
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].username, "alicia");
        assert_eq!(found[0].avatar.as_deref(), Some("/media/avatars/x.png"));
    }

    #[tokio::test]
    async fn search_sql_uses_ilike_and_excludes_caller() {
        let caller = UserId::from(Uuid::new_v4());
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();
        let db = Arc::new(db);

        UserQueryPostgres::new(Arc::clone(&db))
            .search("bob", caller, 10)
            .await
            .unwrap();

        let log = Arc::try_unwrap(db).ok().unwrap().into_transaction_log();
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("ILIKE"));
        assert!(sql.contains("<>"));
        assert!(sql.contains("LIMIT"));
    }

    #[tokio::test]
    async fn find_summaries_skips_query_for_empty_input() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let found = UserQueryPostgres::new(Arc::new(db))
            .find_summaries(&[])
            .await
            .unwrap();

        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn username_lookup_is_exact_and_case_sensitive() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![Vec::<UserModel>::new()])
                .into_connection(),
        );

        let found = UserQueryPostgres::new(Arc::clone(&db))
            .find_by_username("Alice")
            .await
            .unwrap();
        assert!(found.is_none());

        let log = Arc::try_unwrap(db).ok().unwrap().into_transaction_log();
        assert_eq!(
            log,
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "users"."id", "users"."username", "users"."email", "users"."password_hash", "users"."first_name", "users"."last_name", "users"."bio", "users"."avatar", "users"."is_superuser", "users"."created_at", "users"."updated_at" FROM "users" WHERE "users"."username" = $1 LIMIT $2"#,
                ["Alice".into(), 1u64.into()]
            )]
        );
    }

    #[tokio::test]
    async fn find_summaries_queries_in_chunks_and_sorts_by_username() {
        let alice = user_model("alice");
        let bob = user_model("bob");
        let mut ids: Vec<UserId> = (0..crate::shared::db::ID_CHUNK_SIZE)
            .map(|_| UserId::from(Uuid::new_v4()))
            .collect();
        ids.push(UserId::from(alice.id));
        ids.push(UserId::from(bob.id));

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results(vec![vec![bob]])
                .append_query_results(vec![vec![alice]])
                .into_connection(),
        );

        let found = UserQueryPostgres::new(Arc::clone(&db))
            .find_summaries(&ids)
            .await
            .unwrap();

        let names: Vec<&str> = found.iter().map(|s| s.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob"]);

        let log = Arc::try_unwrap(db).ok().unwrap().into_transaction_log();
        assert_eq!(log.len(), 2);
    }

    #[tokio::test]
    async fn count_friends_reads_count_column() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![BTreeMap::from([(
                "num_items".to_string(),
                Value::BigInt(Some(4)),
            )])]])
            .into_connection();

        let count = UserQueryPostgres::new(Arc::new(db))
            .count_friends(UserId::from(Uuid::new_v4()))
            .await
            .unwrap();

        assert_eq!(count, 4);
    }

    #[tokio::test]
    async fn database_errors_are_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal("boom".into()))])
            .into_connection();

        let result = UserQueryPostgres::new(Arc::new(db)).list_users().await;

        assert!(matches!(result, Err(UserQueryError::DatabaseError(_))));
    }
}
