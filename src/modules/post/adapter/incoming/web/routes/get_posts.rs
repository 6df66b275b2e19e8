use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::auth::application::domain::entities::UserId;
use crate::post::application::ports::incoming::use_cases::GetPostsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PostsQuery {
    pub author: Option<Uuid>,
}

#[get("/api/posts/")]
pub async fn get_posts_handler(
    user: AuthenticatedUser,
    query: web::Query<PostsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let author = query.author.map(UserId::from);

    match data.post.get_list.execute(user.user_id, author).await {
        Ok(posts) => ApiResponse::success(posts),
        Err(err) => map_get_posts_error(err),
    }
}

/// Everyone's posts, newest first.
#[get("/api/posts/feed/")]
pub async fn get_feed_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.post.get_feed.execute(user.user_id).await {
        Ok(posts) => ApiResponse::success(posts),
        Err(err) => map_get_posts_error(err),
    }
}

fn map_get_posts_error(err: GetPostsError) -> HttpResponse {
    match err {
        GetPostsError::QueryError(e) => {
            error!(error = %e, "Listing posts failed");
            ApiResponse::internal_error()
        }
    }
}
