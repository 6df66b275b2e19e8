use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use super::sea_orm_entity::{likes, posts};
use crate::auth::adapter::outgoing::sea_orm_entity::users::summaries_by_id;
use crate::auth::application::domain::entities::UserId;
use crate::comment::adapter::outgoing::sea_orm_entity::comments;
use crate::comment::application::domain::CommentView;
use crate::media::application::domain::media_url;
use crate::post::application::domain::PostView;
use crate::post::application::ports::outgoing::{PostQuery, PostQueryError};
use crate::shared::db::ID_CHUNK_SIZE;

/// Builds post views from the posts, their likes, their comments and every
/// author involved. Id lists are split into chunks of [`ID_CHUNK_SIZE`].
#[derive(Clone)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn assemble(
        &self,
        viewer: UserId,
        rows: Vec<posts::Model>,
    ) -> Result<Vec<PostView>, DbErr> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let post_ids: Vec<Uuid> = rows.iter().map(|p| p.id).collect();

        let mut like_rows = Vec::new();
        let mut comment_rows = Vec::new();
        for chunk in post_ids.chunks(ID_CHUNK_SIZE) {
            like_rows.extend(
                likes::Entity::find()
                    .filter(likes::Column::PostId.is_in(chunk.iter().copied()))
                    .all(&*self.db)
                    .await?,
            );
            // Every comment of a post lands in the same chunk, so per-post order holds.
            comment_rows.extend(
                comments::Entity::find()
                    .filter(comments::Column::PostId.is_in(chunk.iter().copied()))
                    .order_by_asc(comments::Column::CreatedAt)
                    .all(&*self.db)
                    .await?,
            );
        }

        let authors = summaries_by_id(
            &*self.db,
            rows.iter()
                .map(|p| p.author_id)
                .chain(comment_rows.iter().map(|c| c.author_id)),
        )
        .await?;

        let mut like_counts: HashMap<Uuid, u64> = HashMap::new();
        let mut liked_by_viewer: HashSet<Uuid> = HashSet::new();
        for like in &like_rows {
            *like_counts.entry(like.post_id).or_default() += 1;
            if like.user_id == viewer.value() {
                liked_by_viewer.insert(like.post_id);
            }
        }

        let mut comments_by_post: HashMap<Uuid, Vec<CommentView>> = HashMap::new();
        for comment in &comment_rows {
            match authors.get(&comment.author_id) {
                Some(author) => comments_by_post
                    .entry(comment.post_id)
                    .or_default()
                    .push(comment.to_view(author.clone())),
                None => warn!(comment_id = %comment.id, "Comment author missing; skipping"),
            }
        }

        let mut views = Vec::with_capacity(rows.len());
        for post in rows {
            let Some(author) = authors.get(&post.author_id) else {
                warn!(post_id = %post.id, "Post author missing; skipping");
                continue;
            };
            let comments = comments_by_post.remove(&post.id).unwrap_or_default();

            views.push(PostView {
                id: post.id,
                author: author.clone(),
                content: post.content,
                image: post.image.as_deref().map(media_url),
                likes_count: like_counts.get(&post.id).copied().unwrap_or(0),
                comments_count: comments.len() as u64,
                comments,
                is_liked: liked_by_viewer.contains(&post.id),
                created_at: post.created_at.with_timezone(&chrono::Utc),
                updated_at: post.updated_at.with_timezone(&chrono::Utc),
            });
        }

        Ok(views)
    }
}

fn map_db_err(e: DbErr) -> PostQueryError {
    PostQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn list(
        &self,
        viewer: UserId,
        author: Option<UserId>,
    ) -> Result<Vec<PostView>, PostQueryError> {
        let mut select = posts::Entity::find();
        if let Some(author) = author {
            select = select.filter(posts::Column::AuthorId.eq(author.value()));
        }

        let rows = select
            .order_by_desc(posts::Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.assemble(viewer, rows).await.map_err(map_db_err)
    }

    async fn find(
        &self,
        viewer: UserId,
        post_id: Uuid,
    ) -> Result<Option<PostView>, PostQueryError> {
        let Some(row) = posts::Entity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut views = self.assemble(viewer, vec![row]).await.map_err(map_db_err)?;

        Ok(views.pop())
    }
}
