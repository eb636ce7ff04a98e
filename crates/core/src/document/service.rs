//! Document service implementation.

use std::sync::Arc;

use bytes::Bytes;

use super::error::DocumentError;
use super::types::{CreateDocumentInput, Document, UploadDocumentInput};
use crate::storage::StorageService;

/// Repository trait for document persistence.
///
/// Every lookup is scoped to an agency; a document of another agency is
/// reported as absent.
pub trait DocumentRepository: Send + Sync {
    /// Create a new document record.
    fn create(
        &self,
        input: CreateDocumentInput,
    ) -> impl std::future::Future<Output = Result<Document, DocumentError>> + Send;

    /// Find a document by ID within an agency.
    fn find(
        &self,
        id: i32,
        agency_id: i32,
    ) -> impl std::future::Future<Output = Result<Option<Document>, DocumentError>> + Send;

    /// List an agency's documents.
    fn list_by_agency(
        &self,
        agency_id: i32,
    ) -> impl std::future::Future<Output = Result<Vec<Document>, DocumentError>> + Send;

    /// Delete a document record; returns false if nothing matched.
    fn delete(
        &self,
        id: i32,
        agency_id: i32,
    ) -> impl std::future::Future<Output = Result<bool, DocumentError>> + Send;
}

/// Document service coordinating file storage and metadata records.
pub struct DocumentService<R: DocumentRepository> {
    storage: Arc<StorageService>,
    repo: Arc<R>,
}

impl<R: DocumentRepository> DocumentService<R> {
    /// Create a new document service.
    #[must_use]
    pub fn new(storage: Arc<StorageService>, repo: Arc<R>) -> Self {
        Self { storage, repo }
    }

    /// Store an upload and record it.
    ///
    /// If the record cannot be written the stored file is removed again.
    ///
    /// # Errors
    ///
    /// Returns an error if the filename is empty, the file is too large,
    /// or storage or the repository fails.
    pub async fn upload(&self, input: UploadDocumentInput) -> Result<Document, DocumentError> {
        if input.filename.trim().is_empty() {
            return Err(DocumentError::MissingFilename);
        }

        let stored = self.storage.store(&input.filename, input.data).await?;

        let create = CreateDocumentInput {
            filename: input.filename,
            filepath: stored.key.clone(),
            realtor_id: input.realtor_id,
            agency_id: input.agency_id,
            property_id: input.property_id,
        };

        match self.repo.create(create).await {
            Ok(document) => {
                tracing::info!(
                    document_id = document.id,
                    agency_id = document.agency_id,
                    size = stored.size,
                    "document uploaded"
                );
                Ok(document)
            }
            Err(e) => {
                if let Err(cleanup) = self.storage.delete(&stored.key).await {
                    tracing::warn!(key = %stored.key, error = %cleanup, "failed to remove orphaned upload");
                }
                Err(e)
            }
        }
    }

    /// Get a document by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the document does not exist in the agency.
    pub async fn get(&self, id: i32, agency_id: i32) -> Result<Document, DocumentError> {
        self.repo
            .find(id, agency_id)
            .await?
            .ok_or(DocumentError::NotFound(id))
    }

    /// List an agency's documents.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails.
    pub async fn list(&self, agency_id: i32) -> Result<Vec<Document>, DocumentError> {
        self.repo.list_by_agency(agency_id).await
    }

    /// Fetch a document together with its stored bytes.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the record is missing, or a storage error if the
    /// file cannot be read.
    pub async fn download(&self, id: i32, agency_id: i32) -> Result<(Document, Bytes), DocumentError> {
        let document = self.get(id, agency_id).await?;
        let data = self.storage.read(&document.filepath).await?;
        Ok((document, data))
    }

    /// Delete a document.
    ///
    /// The record goes first; a failure to remove the stored file is logged
    /// and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the document does not exist in the agency.
    pub async fn delete(&self, id: i32, agency_id: i32) -> Result<(), DocumentError> {
        let document = self.get(id, agency_id).await?;

        if !self.repo.delete(id, agency_id).await? {
            return Err(DocumentError::NotFound(id));
        }

        if let Err(e) = self.storage.delete(&document.filepath).await {
            tracing::warn!(document_id = id, key = %document.filepath, error = %e, "failed to delete stored file");
        }

        tracing::info!(document_id = id, agency_id, "document deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageConfig;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory repository for testing.
    #[derive(Default)]
    struct MockDocumentRepository {
        documents: Mutex<HashMap<i32, Document>>,
        fail_create: bool,
    }

    impl DocumentRepository for MockDocumentRepository {
        async fn create(&self, input: CreateDocumentInput) -> Result<Document, DocumentError> {
            if self.fail_create {
                return Err(DocumentError::repository("insert failed"));
            }
            let mut documents = self.documents.lock().unwrap();
            let id = i32::try_from(documents.len()).unwrap() + 1;
            let document = Document {
                id,
                filename: input.filename,
                filepath: input.filepath,
                realtor_id: input.realtor_id,
                agency_id: input.agency_id,
                property_id: input.property_id,
                created_at: chrono::Utc::now(),
            };
            documents.insert(id, document.clone());
            Ok(document)
        }

        async fn find(&self, id: i32, agency_id: i32) -> Result<Option<Document>, DocumentError> {
            Ok(self
                .documents
                .lock()
                .unwrap()
                .get(&id)
                .filter(|d| d.agency_id == agency_id)
                .cloned())
        }

        async fn list_by_agency(&self, agency_id: i32) -> Result<Vec<Document>, DocumentError> {
            let mut docs: Vec<Document> = self
                .documents
                .lock()
                .unwrap()
                .values()
                .filter(|d| d.agency_id == agency_id)
                .cloned()
                .collect();
            docs.sort_by_key(|d| d.id);
            Ok(docs)
        }

        async fn delete(&self, id: i32, agency_id: i32) -> Result<bool, DocumentError> {
            let mut documents = self.documents.lock().unwrap();
            if documents.get(&id).is_some_and(|d| d.agency_id == agency_id) {
                documents.remove(&id);
                return Ok(true);
            }
            Ok(false)
        }
    }

    fn upload(filename: &str, agency_id: i32) -> UploadDocumentInput {
        UploadDocumentInput {
            filename: filename.to_string(),
            data: Bytes::from_static(b"lease terms"),
            realtor_id: 1,
            agency_id,
            property_id: None,
        }
    }

    fn service(
        dir: &tempfile::TempDir,
        repo: MockDocumentRepository,
    ) -> DocumentService<MockDocumentRepository> {
        let storage = StorageService::from_config(StorageConfig::new(dir.path())).unwrap();
        DocumentService::new(Arc::new(storage), Arc::new(repo))
    }

    #[tokio::test]
    async fn test_upload_then_delete_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir, MockDocumentRepository::default());

        let doc = service.upload(upload("lease.pdf", 1)).await.unwrap();
        assert_eq!(doc.filename, "lease.pdf");
        assert!(doc.filepath.ends_with(".pdf"));
        assert_ne!(doc.filepath, "lease.pdf");
        assert!(dir.path().join(&doc.filepath).exists());

        let (_, data) = service.download(doc.id, 1).await.unwrap();
        assert_eq!(&data[..], b"lease terms");

        service.delete(doc.id, 1).await.unwrap();
        assert!(matches!(
            service.get(doc.id, 1).await,
            Err(DocumentError::NotFound(_))
        ));
        assert!(!dir.path().join(&doc.filepath).exists());
    }

    #[tokio::test]
    async fn test_other_agency_sees_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir, MockDocumentRepository::default());

        let doc = service.upload(upload("plan.png", 1)).await.unwrap();

        assert!(matches!(
            service.get(doc.id, 2).await,
            Err(DocumentError::NotFound(_))
        ));
        assert!(matches!(
            service.delete(doc.id, 2).await,
            Err(DocumentError::NotFound(_))
        ));
        assert!(service.list(2).await.unwrap().is_empty());
        assert!(dir.path().join(&doc.filepath).exists());
    }

    #[tokio::test]
    async fn test_delete_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir, MockDocumentRepository::default());

        let doc = service.upload(upload("deed.pdf", 1)).await.unwrap();
        std::fs::remove_file(dir.path().join(&doc.filepath)).unwrap();

        service.delete(doc.id, 1).await.unwrap();
        assert!(service.list(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_record_removes_stored_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = MockDocumentRepository {
            fail_create: true,
            ..MockDocumentRepository::default()
        };
        let service = service(&dir, repo);

        let result = service.upload(upload("deed.pdf", 1)).await;
        assert!(matches!(result, Err(DocumentError::Repository(_))));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_empty_filename_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir, MockDocumentRepository::default());

        let result = service.upload(upload("  ", 1)).await;
        assert!(matches!(result, Err(DocumentError::MissingFilename)));
    }
}
