use std::path::{Path, PathBuf};

use super::fixtures::{PLACEHOLDER_COLOURS, PLACEHOLDER_HEIGHT, PLACEHOLDER_WIDTH};
use super::placeholder_image::solid_png;

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

#[derive(Debug, Clone, PartialEq)]
pub struct SeedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ImageSourceError {
    #[error("Reading {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Encoding placeholder: {0}")]
    Encode(#[from] image::ImageError),
}

/// Where post images come from: real files when a directory provides them,
/// generated solid-colour PNGs otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    Files(Vec<PathBuf>),
    Placeholders,
}

impl ImageSource {
    /// Lists image files in `dir`, sorted by name. A missing, unreadable or
    /// image-less directory yields [`ImageSource::Placeholders`].
    pub fn scan(dir: Option<&Path>) -> Self {
        let Some(dir) = dir else {
            return Self::Placeholders;
        };
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Self::Placeholders;
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_image_extension(path))
            .collect();
        files.sort();

        if files.is_empty() {
            Self::Placeholders
        } else {
            Self::Files(files)
        }
    }

    /// Image for the post at `index`; files are cycled.
    pub fn image_for(&self, index: usize) -> Result<SeedImage, ImageSourceError> {
        match self {
            Self::Files(files) if !files.is_empty() => {
                let path = &files[index % files.len()];
                let bytes = std::fs::read(path).map_err(|source| ImageSourceError::Read {
                    path: path.clone(),
                    source,
                })?;
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| format!("image_{index}"));
                Ok(SeedImage { file_name, bytes })
            }
            _ => {
                let colour = PLACEHOLDER_COLOURS[index % PLACEHOLDER_COLOURS.len()];
                Ok(SeedImage {
                    file_name: format!("placeholder_{index}.png"),
                    bytes: solid_png(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, colour)?,
                })
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Files(files) => format!("{} image file(s)", files.len()),
            Self::Placeholders => "solid-colour placeholders".to_string(),
        }
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
