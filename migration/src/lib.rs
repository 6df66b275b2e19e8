pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20250305_090000_create_friendships_table;
mod m20250306_100000_create_posts_and_likes_tables;
mod m20250307_100000_create_comments_table;
mod m20250308_100000_create_messages_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20250305_090000_create_friendships_table::Migration),
            Box::new(m20250306_100000_create_posts_and_likes_tables::Migration),
            Box::new(m20250307_100000_create_comments_table::Migration),
            Box::new(m20250308_100000_create_messages_table::Migration),
        ]
    }
}
