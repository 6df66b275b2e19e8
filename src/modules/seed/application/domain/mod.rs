pub mod fixtures;
pub mod image_source;
pub mod placeholder_image;

pub use fixtures::SeedUser;
pub use image_source::{ImageSource, SeedImage};
pub use placeholder_image::solid_png;
