pub mod fetch_profile;
pub mod list_users;
pub mod login_user;
pub mod refresh_token;
pub mod register_user;
pub mod search_users;
pub mod update_profile;
