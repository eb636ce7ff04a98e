//! Storage service implementation using Apache OpenDAL.

use std::path::Path;

use bytes::Bytes;
use opendal::{ErrorKind, Operator, services};
use uuid::Uuid;

use super::config::StorageConfig;
use super::error::StorageError;

/// A file written to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Storage key, relative to the storage root.
    pub key: String,
    /// Size in bytes.
    pub size: u64,
}

/// Storage service for uploaded documents.
#[derive(Debug, Clone)]
pub struct StorageService {
    operator: Operator,
    config: StorageConfig,
}

impl StorageService {
    /// Create a new storage service from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage root cannot be initialized.
    pub fn from_config(config: StorageConfig) -> Result<Self, StorageError> {
        let root = config
            .root
            .to_str()
            .ok_or_else(|| StorageError::configuration("invalid path"))?;
        let builder = services::Fs::default().root(root);

        let operator = Operator::new(builder)
            .map_err(|e| StorageError::configuration(e.to_string()))?
            .finish();

        Ok(Self { operator, config })
    }

    /// Reject payloads above the configured limit.
    ///
    /// # Errors
    ///
    /// Returns `FileTooLarge` if `size` exceeds the limit.
    pub fn validate_size(&self, size: u64) -> Result<(), StorageError> {
        if size > self.config.max_file_size {
            return Err(StorageError::file_too_large(size, self.config.max_file_size));
        }
        Ok(())
    }

    /// Generate a fresh storage key for an upload.
    ///
    /// Format: `{uuid v4}{.ext}`; only the extension of the client name is kept.
    #[must_use]
    pub fn generate_key(filename: &str) -> String {
        format!("{}{}", Uuid::new_v4(), extension_of(filename))
    }

    /// Write `data` under a freshly generated key.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is too large or the write fails.
    pub async fn store(&self, filename: &str, data: Bytes) -> Result<StoredFile, StorageError> {
        let size = data.len() as u64;
        self.validate_size(size)?;

        let key = Self::generate_key(filename);
        self.operator.write(&key, data).await?;

        tracing::debug!(key = %key, size, "stored file");
        Ok(StoredFile { key, size })
    }

    /// Read a stored file.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no file exists under `key`.
    pub async fn read(&self, key: &str) -> Result<Bytes, StorageError> {
        let buffer = self.operator.read(key).await?;
        Ok(buffer.to_bytes())
    }

    /// Delete a file from storage.
    ///
    /// # Errors
    ///
    /// Returns an error if deletion fails.
    pub async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.operator.delete(key).await.map_err(StorageError::from)
    }

    /// Check if a file exists in storage.
    pub async fn exists(&self, key: &str) -> bool {
        match self.operator.stat(key).await {
            Ok(_) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "failed to stat stored file");
                false
            }
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &StorageConfig {
        &self.config
    }
}

/// Extension of `filename` including the dot, with unsafe characters replaced.
fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let sanitized: String = ext
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
                .collect();
            format!(".{sanitized}")
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(dir: &tempfile::TempDir) -> StorageService {
        StorageService::from_config(StorageConfig::new(dir.path())).expect("should create service")
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("contract.pdf"), ".pdf");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of(".env"), "");
        assert_eq!(extension_of("../../etc/passwd.t$t"), ".t_t");
    }

    #[test]
    fn test_generate_key_ignores_client_name() {
        let key = StorageService::generate_key("../secret plan.docx");
        assert!(key.ends_with(".docx"));
        assert!(!key.contains('/'));
        assert!(!key.contains("secret"));
        let stem = key.trim_end_matches(".docx");
        assert!(Uuid::parse_str(stem).is_ok());
        assert_ne!(key, StorageService::generate_key("../secret plan.docx"));
    }

    #[test]
    fn test_validate_size() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig::new(dir.path()).with_max_file_size(1024);
        let service = StorageService::from_config(config).unwrap();

        assert!(service.validate_size(1024).is_ok());
        let err = service.validate_size(1025).unwrap_err();
        assert!(matches!(err, StorageError::FileTooLarge { .. }));
    }

    #[tokio::test]
    async fn test_store_read_delete() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let stored = service
            .store("deed.pdf", Bytes::from_static(b"%PDF-1.7"))
            .await
            .unwrap();
        assert_eq!(stored.size, 8);
        assert!(dir.path().join(&stored.key).exists());
        assert!(service.exists(&stored.key).await);

        let data = service.read(&stored.key).await.unwrap();
        assert_eq!(&data[..], b"%PDF-1.7");

        service.delete(&stored.key).await.unwrap();
        assert!(!service.exists(&stored.key).await);
        assert!(!dir.path().join(&stored.key).exists());
    }

    #[tokio::test]
    async fn test_read_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        let err = service.read("missing.pdf").await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_store_rejects_oversized_payload() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig::new(dir.path()).with_max_file_size(4);
        let service = StorageService::from_config(config).unwrap();

        let err = service
            .store("big.bin", Bytes::from_static(b"12345"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::FileTooLarge { size: 5, max: 4 }));
    }
}
