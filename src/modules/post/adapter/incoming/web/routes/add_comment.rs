use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::comment::application::ports::incoming::use_cases::{
    CreateCommentCommand, CreateCommentError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AddCommentRequest {
    #[serde(default)]
    pub content: String,
}

/// Comment on the post named in the path.
#[post("/api/posts/{post_id}/comment/")]
pub async fn add_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    req: web::Json<AddCommentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    let command = match CreateCommentCommand::new(user.user_id, post_id, &req.content) {
        Ok(command) => command,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.comment.create.execute(command).await {
        Ok(view) => {
            info!(comment_id = %view.id, post_id = %post_id, user_id = %user.user_id, "Comment added");
            ApiResponse::created(view)
        }
        Err(err) => map_add_comment_error(err, post_id),
    }
}

fn map_add_comment_error(err: CreateCommentError, post_id: Uuid) -> HttpResponse {
    match err {
        CreateCommentError::PostNotFound => {
            warn!(post_id = %post_id, "Comment on unknown post");
            ApiResponse::not_found("POST_NOT_FOUND", "Not found.")
        }
        CreateCommentError::RepositoryError(e) => {
            error!(post_id = %post_id, error = %e, "Adding comment failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::application::service::CreateCommentService;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder, auth_helper::fake_token_provider_data,
        comment_fixtures::InMemoryComments, user_fixtures::FakeTokenProvider,
    };
    use actix_web::{http::StatusCode, test, App};

    async fn call(
        comments: InMemoryComments,
        post_id: Uuid,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_create_comment(CreateCommentService::new(
                            comments.clone(),
                            comments,
                        ))
                        .build(),
                )
                .app_data(fake_token_provider_data())
                .service(add_comment_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/posts/{post_id}/comment/"))
            .insert_header(FakeTokenProvider::access_header(Uuid::new_v4()))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn comment_is_attached_to_path_post() {
        let post_id = Uuid::new_v4();
        let comments = InMemoryComments::with_post(post_id);

        let (status, json) = call(
            comments.clone(),
            post_id,
            serde_json::json!({ "content": "Great shot" }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["post"], post_id.to_string());
        assert_eq!(json["content"], "Great shot");
        assert_eq!(comments.len(), 1);
    }

    #[actix_web::test]
    async fn blank_comment_is_rejected() {
        let post_id = Uuid::new_v4();

        let (status, json) = call(
            InMemoryComments::with_post(post_id),
            post_id,
            serde_json::json!({ "content": "" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["detail"], "This field may not be blank.");
    }

    #[actix_web::test]
    async fn unknown_post_is_404() {
        let (status, _) = call(
            InMemoryComments::default(),
            Uuid::new_v4(),
            serde_json::json!({ "content": "hello?" }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
