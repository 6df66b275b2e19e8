use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
    Set,
};
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::{friendships, users};
use crate::auth::application::domain::entities::UserId;
use crate::comment::adapter::outgoing::sea_orm_entity::comments;
use crate::message::adapter::outgoing::sea_orm_entity::messages;
use crate::post::adapter::outgoing::sea_orm_entity::{likes, posts};
use crate::seed::application::domain::SeedUser;
use crate::seed::application::ports::outgoing::{SeedStore, SeedStoreError};

/// Seed writes over any connection; the runner hands it a transaction.
pub struct SeedStorePostgres<'a, C>
where
    C: ConnectionTrait,
{
    db: &'a C,
}

impl<'a, C> SeedStorePostgres<'a, C>
where
    C: ConnectionTrait,
{
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}

fn db_error(e: DbErr) -> SeedStoreError {
    SeedStoreError::DatabaseError(e.to_string())
}

#[async_trait]
impl<'a, C> SeedStore for SeedStorePostgres<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn clear(&self) -> Result<(), SeedStoreError> {
        messages::Entity::delete_many()
            .exec(self.db)
            .await
            .map_err(db_error)?;
        comments::Entity::delete_many()
            .exec(self.db)
            .await
            .map_err(db_error)?;
        likes::Entity::delete_many()
            .exec(self.db)
            .await
            .map_err(db_error)?;
        posts::Entity::delete_many()
            .exec(self.db)
            .await
            .map_err(db_error)?;
        users::Entity::delete_many()
            .filter(users::Column::IsSuperuser.eq(false))
            .exec(self.db)
            .await
            .map_err(db_error)?;
        Ok(())
    }

    async fn find_user(&self, username: &str) -> Result<Option<UserId>, SeedStoreError> {
        let id: Option<Uuid> = users::Entity::find()
            .select_only()
            .column(users::Column::Id)
            .filter(users::Column::Username.eq(username))
            .into_tuple()
            .one(self.db)
            .await
            .map_err(db_error)?;

        Ok(id.map(UserId::from))
    }

    async fn create_user(
        &self,
        user: &SeedUser,
        password_hash: &str,
    ) -> Result<UserId, SeedStoreError> {
        let model = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username.to_string()),
            email: Set(user.email.to_string()),
            password_hash: Set(password_hash.to_string()),
            first_name: Set(user.first_name.to_string()),
            last_name: Set(user.last_name.to_string()),
            bio: Set(user.bio.to_string()),
            avatar: Set(None),
            is_superuser: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        }
        .insert(self.db)
        .await
        .map_err(db_error)?;

        Ok(UserId::from(model.id))
    }

    async fn add_friendship(&self, a: UserId, b: UserId) -> Result<(), SeedStoreError> {
        let now = Utc::now().fixed_offset();
        let rows = [(a, b), (b, a)].map(|(user, friend)| friendships::ActiveModel {
            user_id: Set(user.value()),
            friend_id: Set(friend.value()),
            created_at: Set(now),
        });

        friendships::Entity::insert_many(rows)
            .on_conflict(
                OnConflict::columns([friendships::Column::UserId, friendships::Column::FriendId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
            .map_err(db_error)?;
        Ok(())
    }

    async fn create_post(
        &self,
        author: UserId,
        content: &str,
        image: Option<String>,
    ) -> Result<Uuid, SeedStoreError> {
        let now = Utc::now().fixed_offset();
        let model = posts::ActiveModel {
            id: Set(Uuid::new_v4()),
            author_id: Set(author.value()),
            content: Set(content.to_string()),
            image: Set(image),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(self.db)
        .await
        .map_err(db_error)?;

        Ok(model.id)
    }

    async fn add_like(&self, user: UserId, post_id: Uuid) -> Result<bool, SeedStoreError> {
        let like = likes::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user.value()),
            post_id: Set(post_id),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = likes::Entity::insert(like)
            .on_conflict(
                OnConflict::columns([likes::Column::UserId, likes::Column::PostId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await
            .map_err(db_error)?;

        Ok(inserted > 0)
    }

    async fn create_comment(
        &self,
        author: UserId,
        post_id: Uuid,
        content: &str,
    ) -> Result<(), SeedStoreError> {
        comments::ActiveModel {
            id: Set(Uuid::new_v4()),
            author_id: Set(author.value()),
            post_id: Set(post_id),
            content: Set(content.to_string()),
            created_at: Set(Utc::now().fixed_offset()),
        }
        .insert(self.db)
        .await
        .map_err(db_error)?;
        Ok(())
    }

    async fn create_message(
        &self,
        sender: UserId,
        receiver: UserId,
        content: &str,
    ) -> Result<(), SeedStoreError> {
        messages::ActiveModel {
            id: Set(Uuid::new_v4()),
            sender_id: Set(sender.value()),
            receiver_id: Set(receiver.value()),
            content: Set(content.to_string()),
            is_read: Set(false),
            created_at: Set(Utc::now().fixed_offset()),
        }
        .insert(self.db)
        .await
        .map_err(db_error)?;
        Ok(())
    }
}
