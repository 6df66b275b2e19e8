mod create_comment_service;
mod delete_comment_service;
mod get_comments_service;
mod get_single_comment_service;
mod update_comment_service;

pub use create_comment_service::CreateCommentService;
pub use delete_comment_service::DeleteCommentService;
pub use get_comments_service::GetCommentsService;
pub use get_single_comment_service::GetSingleCommentService;
pub use update_comment_service::UpdateCommentService;
