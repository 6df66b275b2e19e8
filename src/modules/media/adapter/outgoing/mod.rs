pub mod local_media_store;

pub use local_media_store::LocalMediaStore;
