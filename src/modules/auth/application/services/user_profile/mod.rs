pub mod fetch_user;
pub mod list_users;
pub mod search_users;
pub mod update_profile;

pub use fetch_user::FetchUserProfileService;
pub use list_users::ListUsersService;
pub use search_users::SearchUsersService;
pub use update_profile::UpdateUserProfileService;
