use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sea_orm::{ConnectOptions, Database};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use social_backend::auth::adapter::outgoing::security::Argon2Hasher;
use social_backend::config::{load_dotenv, media_root_from, Argon2Settings};
use social_backend::media::adapter::outgoing::LocalMediaStore;
use social_backend::seed::application::domain::ImageSource;
use social_backend::seed::application::{run_seed, SeedOptions};

/// Populate the database with demo users, friendships, posts, likes,
/// comments and messages.
#[derive(Debug, Parser)]
#[command(name = "seed_data", version)]
struct Cli {
    /// Delete existing content (superusers are kept) before seeding.
    #[arg(long)]
    clear: bool,

    /// Directory of images to attach to posts. Placeholders are generated
    /// when it is missing or holds no images.
    #[arg(long, env = "SEED_IMAGE_DIR")]
    image_dir: Option<PathBuf>,

    /// Seed for the like/comment shuffle; random when omitted.
    #[arg(long)]
    rng_seed: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let lookup = |key: &str| std::env::var(key).ok();

    let database_url = lookup("DATABASE_URL")
        .filter(|v| !v.trim().is_empty())
        .context("DATABASE_URL is not set")?;
    let media_root = media_root_from(&lookup);
    let hasher = Argon2Hasher::from_settings(&Argon2Settings::from_lookup(lookup)?)?;

    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    let images = ImageSource::scan(cli.image_dir.as_deref());
    info!(media_root = %media_root.display(), images = %images.describe(), clear = cli.clear, "Seeding");

    let mut rng = match cli.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let report = run_seed(
        &db,
        Arc::new(LocalMediaStore::new(media_root)),
        hasher,
        images,
        &SeedOptions { clear: cli.clear },
        &mut rng,
    )
    .await
    .context("Seeding failed")?;

    info!(
        users = report.users,
        users_created = report.users_created,
        friendships = report.friendships,
        posts = report.posts,
        likes = report.likes,
        comments = report.comments,
        messages = report.messages,
        "Seeding complete"
    );
    println!(
        "Seeded {} users, {} posts, {} likes, {} comments, {} messages. Password for every demo user: {}",
        report.users,
        report.posts,
        report.likes,
        report.comments,
        report.messages,
        social_backend::seed::application::domain::fixtures::SEED_PASSWORD
    );

    Ok(())
}
