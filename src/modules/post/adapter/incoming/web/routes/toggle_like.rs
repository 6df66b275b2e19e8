use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::post::application::ports::incoming::use_cases::ToggleLikeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/posts/{post_id}/like/")]
pub async fn toggle_like_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.post.toggle_like.execute(user.user_id, post_id).await {
        Ok(toggle) => {
            info!(
                post_id = %post_id,
                user_id = %user.user_id,
                liked = toggle.liked,
                likes_count = toggle.likes_count,
                "Like toggled"
            );
            ApiResponse::success(toggle)
        }
        Err(err) => map_toggle_like_error(err, post_id),
    }
}

fn map_toggle_like_error(err: ToggleLikeError, post_id: Uuid) -> HttpResponse {
    match err {
        ToggleLikeError::PostNotFound => ApiResponse::not_found("POST_NOT_FOUND", "Not found."),
        ToggleLikeError::RepositoryError(e) => {
            error!(post_id = %post_id, error = %e, "Toggling like failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::application::service::ToggleLikeService;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder, auth_helper::fake_token_provider_data,
        post_fixtures::InMemoryPosts, user_fixtures::FakeTokenProvider,
    };
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn second_toggle_unlikes() {
        let posts = InMemoryPosts::default();
        let post = posts.insert(Uuid::new_v4(), "like me", None);
        let liker = Uuid::new_v4();

        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_toggle_like(ToggleLikeService::new(posts.clone(), posts.clone()))
                        .build(),
                )
                .app_data(fake_token_provider_data())
                .service(toggle_like_handler),
        )
        .await;

        let mut bodies = Vec::new();
        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri(&format!("/api/posts/{}/like/", post.id))
                .insert_header(FakeTokenProvider::access_header(liker))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            bodies.push(test::read_body_json::<serde_json::Value, _>(resp).await);
        }

        assert_eq!(bodies[0], serde_json::json!({ "liked": true, "likes_count": 1 }));
        assert_eq!(bodies[1], serde_json::json!({ "liked": false, "likes_count": 0 }));
        assert_eq!(posts.like_rows(post.id), 0);
    }

    #[actix_web::test]
    async fn unknown_post_is_404() {
        let posts = InMemoryPosts::default();
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_toggle_like(ToggleLikeService::new(posts.clone(), posts))
                        .build(),
                )
                .app_data(fake_token_provider_data())
                .service(toggle_like_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{}/like/", Uuid::new_v4()))
            .insert_header(FakeTokenProvider::access_header(Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
