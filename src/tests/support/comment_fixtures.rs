use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::{UserId, UserSummary};
use crate::comment::application::domain::{Comment, CommentView};
use crate::comment::application::ports::outgoing::{
    CommentQuery, CommentQueryError, CommentRepository, CommentRepositoryError, NewComment,
};

pub fn summary_for(user_id: Uuid) -> UserSummary {
    UserSummary {
        id: user_id,
        username: format!("user-{}", &user_id.simple().to_string()[..8]),
        first_name: String::new(),
        last_name: String::new(),
        avatar: None,
    }
}

pub fn view_of(comment: &Comment) -> CommentView {
    CommentView {
        id: comment.id,
        author: summary_for(comment.author_id.value()),
        post: comment.post_id,
        content: comment.content.clone(),
        created_at: comment.created_at,
    }
}

/// Comment store and query over shared vectors.
#[derive(Clone, Default)]
pub struct InMemoryComments {
    comments: Arc<Mutex<Vec<Comment>>>,
    posts: Arc<Mutex<HashSet<Uuid>>>,
}

impl InMemoryComments {
    pub fn with_post(post_id: Uuid) -> Self {
        let store = Self::default();
        store.posts.lock().unwrap().insert(post_id);
        store
    }

    pub fn insert(&self, author: Uuid, post_id: Uuid, content: &str) -> Comment {
        let comment = Comment {
            id: Uuid::new_v4(),
            author_id: UserId::from(author),
            post_id,
            content: content.to_string(),
            created_at: Utc::now(),
        };
        self.posts.lock().unwrap().insert(post_id);
        self.comments.lock().unwrap().push(comment.clone());
        comment
    }

    pub fn get(&self, comment_id: Uuid) -> Option<Comment> {
        self.comments
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == comment_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.comments.lock().unwrap().len()
    }
}

#[async_trait]
impl CommentRepository for InMemoryComments {
    async fn create(&self, data: NewComment) -> Result<Comment, CommentRepositoryError> {
        Ok(self.insert(data.author_id.value(), data.post_id, &data.content))
    }

    async fn find(&self, comment_id: Uuid) -> Result<Option<Comment>, CommentRepositoryError> {
        Ok(self.get(comment_id))
    }

    async fn update_content(
        &self,
        comment_id: Uuid,
        content: String,
    ) -> Result<Comment, CommentRepositoryError> {
        let mut comments = self.comments.lock().unwrap();
        let comment = comments
            .iter_mut()
            .find(|c| c.id == comment_id)
            .ok_or(CommentRepositoryError::NotFound)?;
        comment.content = content;
        Ok(comment.clone())
    }

    async fn delete(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError> {
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| c.id != comment_id);
        if comments.len() == before {
            return Err(CommentRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn post_exists(&self, post_id: Uuid) -> Result<bool, CommentRepositoryError> {
        Ok(self.posts.lock().unwrap().contains(&post_id))
    }
}

#[async_trait]
impl CommentQuery for InMemoryComments {
    async fn list(&self, post_id: Option<Uuid>) -> Result<Vec<CommentView>, CommentQueryError> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| post_id.map_or(true, |p| c.post_id == p))
            .map(view_of)
            .collect())
    }

    async fn find(&self, comment_id: Uuid) -> Result<Option<CommentView>, CommentQueryError> {
        Ok(self.get(comment_id).as_ref().map(view_of))
    }
}
