//! Storage configuration.

use std::path::PathBuf;

use realty_shared::config::StorageSettings;

/// Storage service configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Root directory for stored files.
    pub root: PathBuf,
    /// Maximum file size in bytes.
    pub max_file_size: u64,
}

impl StorageConfig {
    /// Default max file size: 20MB.
    pub const DEFAULT_MAX_FILE_SIZE: u64 = 20 * 1024 * 1024;

    /// Create a config rooted at `root` with the default size limit.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_file_size: Self::DEFAULT_MAX_FILE_SIZE,
        }
    }

    /// Set maximum file size.
    #[must_use]
    pub fn with_max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }
}

impl From<&StorageSettings> for StorageConfig {
    fn from(settings: &StorageSettings) -> Self {
        Self::new(settings.upload_dir.clone()).with_max_file_size(settings.max_file_size)
    }
}
