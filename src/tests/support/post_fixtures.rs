use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::media::application::domain::media_url;
use crate::post::application::domain::{Post, PostView};
use crate::post::application::ports::outgoing::{
    LikeRepository, LikeRepositoryError, NewPost, PatchField, PostChanges, PostQuery,
    PostQueryError, PostRepository, PostRepositoryError,
};
use crate::tests::support::comment_fixtures::summary_for;

/// Posts and likes kept in memory; implements the write, read and like ports.
#[derive(Clone, Default)]
pub struct InMemoryPosts {
    posts: Arc<Mutex<Vec<Post>>>,
    likes: Arc<Mutex<HashSet<(Uuid, Uuid)>>>,
}

impl InMemoryPosts {
    pub fn insert(&self, author: Uuid, content: &str, image: Option<&str>) -> Post {
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            author_id: UserId::from(author),
            content: content.to_string(),
            image: image.map(str::to_string),
            created_at: now,
            updated_at: now,
        };
        self.posts.lock().unwrap().push(post.clone());
        post
    }

    pub fn get(&self, post_id: Uuid) -> Option<Post> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == post_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn like_rows(&self, post_id: Uuid) -> usize {
        self.likes
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, p)| *p == post_id)
            .count()
    }

    fn view(&self, viewer: UserId, post: &Post) -> PostView {
        let likes = self.likes.lock().unwrap();
        PostView {
            id: post.id,
            author: summary_for(post.author_id.value()),
            content: post.content.clone(),
            image: post.image.as_deref().map(media_url),
            likes_count: likes.iter().filter(|(_, p)| *p == post.id).count() as u64,
            comments_count: 0,
            comments: Vec::new(),
            is_liked: likes.contains(&(viewer.value(), post.id)),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPosts {
    async fn create(&self, data: NewPost) -> Result<Post, PostRepositoryError> {
        Ok(self.insert(
            data.author_id.value(),
            &data.content,
            data.image.as_deref(),
        ))
    }

    async fn find(&self, post_id: Uuid) -> Result<Option<Post>, PostRepositoryError> {
        Ok(self.get(post_id))
    }

    async fn update(
        &self,
        post_id: Uuid,
        changes: PostChanges,
    ) -> Result<Post, PostRepositoryError> {
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or(PostRepositoryError::NotFound)?;
        if let Some(content) = changes.content {
            post.content = content;
        }
        match changes.image {
            PatchField::Unset => {}
            PatchField::Null => post.image = None,
            PatchField::Value(path) => post.image = Some(path),
        }
        post.updated_at = Utc::now();
        Ok(post.clone())
    }

    async fn delete(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != post_id);
        if posts.len() == before {
            return Err(PostRepositoryError::NotFound);
        }
        self.likes.lock().unwrap().retain(|(_, p)| *p != post_id);
        Ok(())
    }
}

#[async_trait]
impl PostQuery for InMemoryPosts {
    async fn list(
        &self,
        viewer: UserId,
        author: Option<UserId>,
    ) -> Result<Vec<PostView>, PostQueryError> {
        let posts = self.posts.lock().unwrap().clone();
        Ok(posts
            .iter()
            .rev()
            .filter(|p| author.map_or(true, |a| p.author_id == a))
            .map(|p| self.view(viewer, p))
            .collect())
    }

    async fn find(
        &self,
        viewer: UserId,
        post_id: Uuid,
    ) -> Result<Option<PostView>, PostQueryError> {
        Ok(self.get(post_id).map(|p| self.view(viewer, &p)))
    }
}

#[async_trait]
impl LikeRepository for InMemoryPosts {
    async fn exists(&self, user_id: UserId, post_id: Uuid) -> Result<bool, LikeRepositoryError> {
        Ok(self
            .likes
            .lock()
            .unwrap()
            .contains(&(user_id.value(), post_id)))
    }

    async fn add(&self, user_id: UserId, post_id: Uuid) -> Result<(), LikeRepositoryError> {
        self.likes.lock().unwrap().insert((user_id.value(), post_id));
        Ok(())
    }

    async fn remove(&self, user_id: UserId, post_id: Uuid) -> Result<(), LikeRepositoryError> {
        self.likes
            .lock()
            .unwrap()
            .remove(&(user_id.value(), post_id));
        Ok(())
    }

    async fn count(&self, post_id: Uuid) -> Result<u64, LikeRepositoryError> {
        Ok(self.like_rows(post_id) as u64)
    }
}

/// Bare view used by handler tests that stub the use case.
pub fn post_view(author: Uuid, content: &str) -> PostView {
    let now = Utc::now();
    PostView {
        id: Uuid::new_v4(),
        author: summary_for(author),
        content: content.to_string(),
        image: None,
        likes_count: 0,
        comments_count: 0,
        comments: Vec::new(),
        is_liked: false,
        created_at: now,
        updated_at: now,
    }
}
