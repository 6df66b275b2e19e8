mod fetch_user;
mod list_users;
mod login_user;
mod refresh_token;
mod register_user;
mod search_users;
mod update_profile;

pub use fetch_user::*;
pub use list_users::*;
pub use login_user::*;
pub use refresh_token::*;
pub use register_user::*;
pub use search_users::*;
pub use update_profile::*;
