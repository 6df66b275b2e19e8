mod image_upload;
mod upload_policy;

pub use image_upload::{ImageUpload, ImageUploadDto, ImageUploadError};
pub use upload_policy::UploadPolicy;

/// URL prefix under which stored media is served.
pub const MEDIA_URL_PREFIX: &str = "/media/";

/// Public URL for a stored media path such as `posts/abc_photo.png`.
pub fn media_url(path: &str) -> String {
    format!("{}{}", MEDIA_URL_PREFIX, path.trim_start_matches('/'))
}
