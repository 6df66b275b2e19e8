use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Deserialize;
use utoipa::ToSchema;

use super::UploadPolicy;

/// Image sent inside a JSON body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ImageUploadDto {
    /// Original file name; its extension decides the stored type
    #[schema(example = "holiday.png")]
    pub file_name: String,

    /// Base64 encoded file content, optionally as a `data:` URL
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ImageUploadError {
    #[error("File name cannot be empty")]
    EmptyFileName,

    #[error("File name is too long")]
    FileNameTooLong,

    #[error("Unsupported image type: {0}")]
    UnsupportedType(String),

    #[error("Image data is not valid base64")]
    InvalidEncoding,

    #[error("Image is empty")]
    EmptyContent,

    #[error("Image exceeds {0} bytes")]
    TooLarge(usize),
}

/// An image accepted by an [`UploadPolicy`], ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    file_name: String,
    bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(
        file_name: &str,
        bytes: Vec<u8>,
        policy: &UploadPolicy,
    ) -> Result<Self, ImageUploadError> {
        let file_name = file_name.trim();

        if file_name.is_empty() {
            return Err(ImageUploadError::EmptyFileName);
        }

        if file_name.len() > policy.max_file_name_len {
            return Err(ImageUploadError::FileNameTooLong);
        }

        if !policy.is_allowed_file_name(file_name) {
            return Err(ImageUploadError::UnsupportedType(file_name.to_string()));
        }

        if bytes.is_empty() {
            return Err(ImageUploadError::EmptyContent);
        }

        if bytes.len() > policy.max_file_size_bytes {
            return Err(ImageUploadError::TooLarge(policy.max_file_size_bytes));
        }

        Ok(Self {
            file_name: file_name.to_string(),
            bytes,
        })
    }

    pub fn from_base64(
        file_name: &str,
        data: &str,
        policy: &UploadPolicy,
    ) -> Result<Self, ImageUploadError> {
        let encoded = match data.trim().strip_prefix("data:") {
            Some(rest) => rest
                .split_once(',')
                .map(|(_, payload)| payload)
                .ok_or(ImageUploadError::InvalidEncoding)?,
            None => data.trim(),
        };

        let bytes = STANDARD
            .decode(encoded)
            .map_err(|_| ImageUploadError::InvalidEncoding)?;

        Self::new(file_name, bytes, policy)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl TryFrom<ImageUploadDto> for ImageUpload {
    type Error = ImageUploadError;

    fn try_from(dto: ImageUploadDto) -> Result<Self, Self::Error> {
        Self::from_base64(&dto.file_name, &dto.data, &UploadPolicy::default())
    }
}
