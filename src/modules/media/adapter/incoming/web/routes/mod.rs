mod get_media;

pub use get_media::get_media_handler;
