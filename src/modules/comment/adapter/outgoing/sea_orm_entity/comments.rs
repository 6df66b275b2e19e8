use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserSummary};
use crate::comment::application::domain::{Comment, CommentView};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author_id: Uuid,
    pub post_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Comment {
        Comment {
            id: self.id,
            author_id: UserId::from(self.author_id),
            post_id: self.post_id,
            content: self.content.clone(),
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }

    pub fn to_view(&self, author: UserSummary) -> CommentView {
        CommentView {
            id: self.id,
            author,
            post: self.post_id,
            content: self.content.clone(),
            created_at: self.created_at.with_timezone(&chrono::Utc),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::AuthorId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade"
    )]
    Author,
    #[sea_orm(
        belongs_to = "crate::post::adapter::outgoing::sea_orm_entity::posts::Entity",
        from = "Column::PostId",
        to = "crate::post::adapter::outgoing::sea_orm_entity::posts::Column::Id",
        on_delete = "Cascade"
    )]
    Post,
}

impl Related<crate::post::adapter::outgoing::sea_orm_entity::posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
