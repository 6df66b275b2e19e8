pub mod app_state_builder;
pub mod auth_helper;
pub mod comment_fixtures;
pub mod message_fixtures;
pub mod post_fixtures;
pub mod seed_fixtures;
pub mod stubs;
pub mod user_fixtures;
