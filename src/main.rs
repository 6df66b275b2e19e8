use social_backend::auth::adapter::outgoing::jwt::JwtTokenService;
use social_backend::auth::adapter::outgoing::security::Argon2Hasher;
use social_backend::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use social_backend::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use social_backend::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use social_backend::auth::application::services::user_profile::{
    FetchUserProfileService, ListUsersService, SearchUsersService, UpdateUserProfileService,
};
use social_backend::auth::application::use_cases::{
    login_user::LoginUserUseCase, refresh_token::RefreshTokenUseCase,
    register_user::RegisterUserUseCase,
};
use social_backend::comment::adapter::outgoing::{
    CommentQueryPostgres, CommentRepositoryPostgres,
};
use social_backend::comment::application::comment_use_cases::CommentUseCases;
use social_backend::comment::application::service::{
    CreateCommentService, DeleteCommentService, GetCommentsService, GetSingleCommentService,
    UpdateCommentService,
};
use social_backend::config::{load_dotenv, AppConfig};
use social_backend::media::adapter::outgoing::LocalMediaStore;
use social_backend::media::application::ports::outgoing::MediaStore;
use social_backend::message::adapter::outgoing::{
    MessageQueryPostgres, MessageRepositoryPostgres,
};
use social_backend::message::application::message_use_cases::MessageUseCases;
use social_backend::message::application::service::{
    DeleteMessageService, GetConversationsService, GetMessagesService, GetSingleMessageService,
    SendMessageService, UpdateMessageService,
};
use social_backend::post::adapter::outgoing::{
    LikeRepositoryPostgres, PostQueryPostgres, PostRepositoryPostgres,
};
use social_backend::post::application::post_use_cases::PostUseCases;
use social_backend::post::application::service::{
    CreatePostService, DeletePostService, GetFeedService, GetPostsService, GetSinglePostService,
    ToggleLikeService, UpdatePostService,
};
use social_backend::{init_routes, AppState};

use actix_web::{middleware::Logger, web, App, HttpServer};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn build_state(
    db: &Arc<DatabaseConnection>,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    media_store: Arc<dyn MediaStore + Send + Sync>,
) -> AppState {
    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));
    let user_query = UserQueryPostgres::new(Arc::clone(db));

    let post_repo = PostRepositoryPostgres::new(Arc::clone(db));
    let post_query = PostQueryPostgres::new(Arc::clone(db));
    let like_repo = LikeRepositoryPostgres::new(Arc::clone(db));

    let comment_repo = CommentRepositoryPostgres::new(Arc::clone(db));
    let comment_query = CommentQueryPostgres::new(Arc::clone(db));

    let message_repo = MessageRepositoryPostgres::new(Arc::clone(db));
    let message_query = MessageQueryPostgres::new(Arc::clone(db));

    let post = PostUseCases {
        create: Arc::new(CreatePostService::new(
            post_repo.clone(),
            post_query.clone(),
            Arc::clone(&media_store),
        )),
        get_list: Arc::new(GetPostsService::new(post_query.clone())),
        get_feed: Arc::new(GetFeedService::new(post_query.clone())),
        get_single: Arc::new(GetSinglePostService::new(post_query.clone())),
        update: Arc::new(UpdatePostService::new(
            post_repo.clone(),
            post_query,
            Arc::clone(&media_store),
        )),
        delete: Arc::new(DeletePostService::new(post_repo.clone())),
        toggle_like: Arc::new(ToggleLikeService::new(post_repo, like_repo)),
    };

    let comment = CommentUseCases {
        create: Arc::new(CreateCommentService::new(
            comment_repo.clone(),
            comment_query.clone(),
        )),
        get_list: Arc::new(GetCommentsService::new(comment_query.clone())),
        get_single: Arc::new(GetSingleCommentService::new(comment_query.clone())),
        update: Arc::new(UpdateCommentService::new(
            comment_repo.clone(),
            comment_query,
        )),
        delete: Arc::new(DeleteCommentService::new(comment_repo)),
    };

    let message = MessageUseCases {
        send: Arc::new(SendMessageService::new(
            message_repo.clone(),
            message_query.clone(),
            user_query.clone(),
        )),
        get_list: Arc::new(GetMessagesService::new(message_query.clone())),
        get_single: Arc::new(GetSingleMessageService::new(message_query.clone())),
        update: Arc::new(UpdateMessageService::new(
            message_repo.clone(),
            message_query.clone(),
        )),
        delete: Arc::new(DeleteMessageService::new(message_repo)),
        conversations: Arc::new(GetConversationsService::new(
            message_query,
            user_query.clone(),
        )),
    };

    AppState {
        register_user_use_case: Arc::new(RegisterUserUseCase::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&hasher),
            Arc::clone(&token_provider),
        )),
        login_user_use_case: Arc::new(LoginUserUseCase::new(
            user_query.clone(),
            Arc::clone(&hasher),
            Arc::clone(&token_provider),
        )),
        refresh_token_use_case: Arc::new(RefreshTokenUseCase::new(Arc::clone(&token_provider))),
        fetch_user_profile_use_case: Arc::new(FetchUserProfileService::new(user_query.clone())),
        update_user_profile_use_case: Arc::new(UpdateUserProfileService::new(
            user_query.clone(),
            user_repo,
            hasher,
            Arc::clone(&media_store),
        )),
        search_users_use_case: Arc::new(SearchUsersService::new(user_query.clone())),
        list_users_use_case: Arc::new(ListUsersService::new(user_query)),
        post,
        comment,
        message,
        media_store,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    load_dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db_arc = Arc::new(Database::connect(opt).await?);

    let hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(Argon2Hasher::from_settings(&config.argon2)?);
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));
    let media_store: Arc<dyn MediaStore + Send + Sync> =
        Arc::new(LocalMediaStore::new(config.media_root.clone()));

    let state = build_state(&db_arc, hasher, Arc::clone(&token_provider), media_store);

    info!(server_url = %server_url, media_root = %config.media_root.display(), "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
