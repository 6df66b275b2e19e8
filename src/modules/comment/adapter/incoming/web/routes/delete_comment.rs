use actix_web::{delete, web, HttpResponse, Responder};
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::comment::application::ports::incoming::use_cases::DeleteCommentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/comments/{comment_id}/")]
pub async fn delete_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let comment_id = path.into_inner();

    match data.comment.delete.execute(user.user_id, comment_id).await {
        Ok(()) => {
            info!(comment_id = %comment_id, user_id = %user.user_id, "Comment deleted");
            ApiResponse::no_content()
        }
        Err(err) => map_delete_comment_error(err, comment_id),
    }
}

fn map_delete_comment_error(err: DeleteCommentError, comment_id: Uuid) -> HttpResponse {
    match err {
        DeleteCommentError::NotFound => ApiResponse::not_found("COMMENT_NOT_FOUND", "Not found."),
        DeleteCommentError::Forbidden => {
            warn!(comment_id = %comment_id, "Comment delete by non-author");
            ApiResponse::forbidden("NOT_COMMENT_AUTHOR", "Not your comment.")
        }
        DeleteCommentError::RepositoryError(e) => {
            error!(comment_id = %comment_id, error = %e, "Deleting comment failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::comment::application::ports::incoming::use_cases::DeleteCommentUseCase;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder, auth_helper::fake_token_provider_data,
        user_fixtures::FakeTokenProvider,
    };
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    struct MockDelete(Result<(), DeleteCommentError>);

    #[async_trait]
    impl DeleteCommentUseCase for MockDelete {
        async fn execute(
            &self,
            _requester: UserId,
            _comment_id: Uuid,
        ) -> Result<(), DeleteCommentError> {
            self.0.clone()
        }
    }

    async fn call(result: Result<(), DeleteCommentError>) -> StatusCode {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_delete_comment(MockDelete(result))
                        .build(),
                )
                .app_data(fake_token_provider_data())
                .service(delete_comment_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/comments/{}/", Uuid::new_v4()))
            .insert_header(FakeTokenProvider::access_header(Uuid::new_v4()))
            .to_request();
        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn maps_outcomes_to_status_codes() {
        assert_eq!(call(Ok(())).await, StatusCode::NO_CONTENT);
        assert_eq!(
            call(Err(DeleteCommentError::Forbidden)).await,
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            call(Err(DeleteCommentError::NotFound)).await,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            call(Err(DeleteCommentError::RepositoryError("x".into()))).await,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
