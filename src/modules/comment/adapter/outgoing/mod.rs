pub mod comment_query_postgres;
pub mod comment_repository_postgres;
pub mod sea_orm_entity;

pub use comment_query_postgres::CommentQueryPostgres;
pub use comment_repository_postgres::CommentRepositoryPostgres;
