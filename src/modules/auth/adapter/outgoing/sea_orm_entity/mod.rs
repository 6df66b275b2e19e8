pub mod friendships;
pub mod users;
