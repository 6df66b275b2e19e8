use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set, SqlErr};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::user_repository::{
    NewUser, ProfileChanges, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Entity as UserEntity};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_write_error(e: DbErr) -> UserRepositoryError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => UserRepositoryError::UsernameTaken,
        _ => UserRepositoryError::DatabaseError(e.to_string()),
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            bio: Set(String::new()),
            avatar: Set(None),
            is_superuser: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(map_write_error)?;

        Ok(inserted.to_domain())
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        changes: ProfileChanges,
    ) -> Result<User, UserRepositoryError> {
        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        if let Some(username) = changes.username {
            active_user.username = Set(username);
        }
        if let Some(email) = changes.email {
            active_user.email = Set(email);
        }
        if let Some(first_name) = changes.first_name {
            active_user.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active_user.last_name = Set(last_name);
        }
        if let Some(bio) = changes.bio {
            active_user.bio = Set(bio);
        }
        if let Some(avatar) = changes.avatar {
            active_user.avatar = Set(Some(avatar));
        }
        if let Some(password_hash) = changes.password_hash {
            active_user.password_hash = Set(password_hash);
        }

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(map_write_error)?;

        Ok(updated.to_domain())
    }
}
