use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::PasswordHasher;
use crate::media::application::domain::{ImageUpload, UploadPolicy};
use crate::media::application::ports::outgoing::MediaStore;
use crate::post::application::domain::POST_IMAGE_FOLDER;
use crate::seed::application::domain::fixtures::{
    post_has_image, COMMENT_PHRASES, FRIEND_PAIRS, POST_TEXTS, SCRIPTED_MESSAGES, SEED_PASSWORD,
    SEED_USERS,
};
use crate::seed::application::domain::image_source::ImageSourceError;
use crate::seed::application::domain::ImageSource;
use crate::seed::application::ports::outgoing::{SeedStore, SeedStoreError};

const MAX_LIKES_PER_POST: usize = 5;
const MAX_COMMENTS_PER_POST: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedOptions {
    /// Wipe existing content before inserting.
    pub clear: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub users_created: usize,
    pub friendships: usize,
    pub posts: usize,
    pub likes: usize,
    pub comments: usize,
    pub messages: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error(transparent)]
    Store(#[from] SeedStoreError),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Post image unavailable: {0}")]
    Image(#[from] ImageSourceError),

    #[error("Storing post image failed: {0}")]
    Media(String),
}

/// Inserts the demo dataset through a [`SeedStore`].
pub struct Seeder<S, H>
where
    S: SeedStore,
    H: PasswordHasher,
{
    store: S,
    hasher: H,
    media_store: Arc<dyn MediaStore + Send + Sync>,
    images: ImageSource,
}

impl<S, H> Seeder<S, H>
where
    S: SeedStore,
    H: PasswordHasher,
{
    pub fn new(
        store: S,
        hasher: H,
        media_store: Arc<dyn MediaStore + Send + Sync>,
        images: ImageSource,
    ) -> Self {
        Self {
            store,
            hasher,
            media_store,
            images,
        }
    }

    pub async fn run<R>(&self, options: &SeedOptions, rng: &mut R) -> Result<SeedReport, SeedError>
    where
        R: Rng + Send,
    {
        let mut report = SeedReport::default();

        if options.clear {
            warn!("Clearing existing content");
            self.store.clear().await?;
        }

        let roster = self.seed_users(&mut report).await?;
        self.seed_friendships(&roster, &mut report).await?;
        let posts = self.seed_posts(&roster, &mut report).await?;
        self.seed_likes(&roster, &posts, rng, &mut report).await?;
        self.seed_comments(&roster, &posts, rng, &mut report).await?;
        self.seed_messages(&roster, &mut report).await?;

        Ok(report)
    }

    /// Find-or-create by username, in roster order. Each new user gets its
    /// own salted hash.
    async fn seed_users(&self, report: &mut SeedReport) -> Result<Vec<(&'static str, UserId)>, SeedError> {
        let mut roster = Vec::with_capacity(SEED_USERS.len());

        for user in &SEED_USERS {
            let id = match self.store.find_user(user.username).await? {
                Some(id) => {
                    info!(username = user.username, "Seed user exists");
                    id
                }
                None => {
                    let hash = self
                        .hasher
                        .hash_password(SEED_PASSWORD)
                        .await
                        .map_err(|e| SeedError::Hashing(e.to_string()))?;
                    let id = self.store.create_user(user, &hash).await?;
                    info!(username = user.username, user_id = %id, "Seed user created");
                    report.users_created += 1;
                    id
                }
            };
            roster.push((user.username, id));
        }

        report.users = roster.len();
        Ok(roster)
    }

    async fn seed_friendships(
        &self,
        roster: &[(&'static str, UserId)],
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        let by_name: HashMap<&str, UserId> = roster.iter().copied().collect();

        for (a, b) in FRIEND_PAIRS {
            if let (Some(&a_id), Some(&b_id)) = (by_name.get(a), by_name.get(b)) {
                self.store.add_friendship(a_id, b_id).await?;
                report.friendships += 1;
            }
        }

        Ok(())
    }

    /// Authors rotate over the roster; see [`post_has_image`].
    async fn seed_posts(
        &self,
        roster: &[(&'static str, UserId)],
        report: &mut SeedReport,
    ) -> Result<Vec<(Uuid, UserId)>, SeedError> {
        info!(source = %self.images.describe(), "Creating posts");
        let mut posts = Vec::with_capacity(POST_TEXTS.len());

        for (index, text) in POST_TEXTS.iter().enumerate() {
            let (_, author) = roster[index % roster.len()];

            let image = if post_has_image(index) {
                Some(self.store_image(index).await?)
            } else {
                None
            };

            let post_id = self.store.create_post(author, text, image).await?;
            posts.push((post_id, author));
        }

        report.posts = posts.len();
        Ok(posts)
    }

    async fn store_image(&self, index: usize) -> Result<String, SeedError> {
        let image = self.images.image_for(index)?;
        let upload = ImageUpload::new(&image.file_name, image.bytes, &UploadPolicy::unbounded())
            .map_err(|e| SeedError::Media(e.to_string()))?;

        self.media_store
            .save(POST_IMAGE_FOLDER, upload)
            .await
            .map_err(|e| SeedError::Media(e.to_string()))
    }

    async fn seed_likes<R>(
        &self,
        roster: &[(&'static str, UserId)],
        posts: &[(Uuid, UserId)],
        rng: &mut R,
        report: &mut SeedReport,
    ) -> Result<(), SeedError>
    where
        R: Rng + Send,
    {
        for &(post_id, author) in posts {
            let candidates = others(roster, author);
            let count = rng.gen_range(1..=MAX_LIKES_PER_POST.min(candidates.len()));

            let likers: Vec<UserId> = candidates.choose_multiple(rng, count).copied().collect();
            for liker in likers {
                if self.store.add_like(liker, post_id).await? {
                    report.likes += 1;
                }
            }
        }

        Ok(())
    }

    async fn seed_comments<R>(
        &self,
        roster: &[(&'static str, UserId)],
        posts: &[(Uuid, UserId)],
        rng: &mut R,
        report: &mut SeedReport,
    ) -> Result<(), SeedError>
    where
        R: Rng + Send,
    {
        for &(post_id, author) in posts {
            let candidates = others(roster, author);
            let count = rng.gen_range(0..=MAX_COMMENTS_PER_POST.min(candidates.len()));

            let commenters: Vec<UserId> =
                candidates.choose_multiple(rng, count).copied().collect();
            for commenter in commenters {
                let phrase = COMMENT_PHRASES[rng.gen_range(0..COMMENT_PHRASES.len())];
                self.store.create_comment(commenter, post_id, phrase).await?;
                report.comments += 1;
            }
        }

        Ok(())
    }

    async fn seed_messages(
        &self,
        roster: &[(&'static str, UserId)],
        report: &mut SeedReport,
    ) -> Result<(), SeedError> {
        let by_name: HashMap<&str, UserId> = roster.iter().copied().collect();

        for (sender, receiver, content) in SCRIPTED_MESSAGES {
            let (Some(&from), Some(&to)) = (by_name.get(sender), by_name.get(receiver)) else {
                warn!(sender = %sender, receiver = %receiver, "Skipping message with unknown party");
                continue;
            };
            self.store.create_message(from, to, content).await?;
            report.messages += 1;
        }

        Ok(())
    }
}

fn others(roster: &[(&'static str, UserId)], author: UserId) -> Vec<UserId> {
    roster
        .iter()
        .map(|&(_, id)| id)
        .filter(|id| *id != author)
        .collect()
}
