#[derive(Debug, Clone, PartialEq)]
pub struct UploadPolicy {
    pub max_file_size_bytes: usize,
    pub max_file_name_len: usize,
    pub allowed_extensions: &'static [&'static str],
}

impl UploadPolicy {
    pub const DEFAULT_ALLOWED_EXTENSIONS: &'static [&'static str] =
        &["jpg", "jpeg", "png", "gif", "webp"];

    /// Same extension rules, no size cap. Used for trusted local files.
    pub fn unbounded() -> Self {
        Self {
            max_file_size_bytes: usize::MAX,
            ..Self::default()
        }
    }

    /// Lower-cased extension of `file_name`, if any.
    pub fn extension_of(file_name: &str) -> Option<String> {
        let (stem, ext) = file_name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    pub fn is_allowed_file_name(&self, file_name: &str) -> bool {
        Self::extension_of(file_name)
            .map(|ext| self.allowed_extensions.contains(&ext.as_str()))
            .unwrap_or(false)
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: 5 * 1024 * 1024, // 5MB
            max_file_name_len: 255,
            allowed_extensions: Self::DEFAULT_ALLOWED_EXTENSIONS,
        }
    }
}
