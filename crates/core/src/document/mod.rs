//! Agency documents: uploaded files plus their metadata records.
//!
//! This module provides:
//! - Upload (store the bytes, then record the metadata)
//! - Agency-scoped lookup, listing and download
//! - Deletion of the record and, best effort, the stored file

mod error;
mod service;
mod types;

pub use error::DocumentError;
pub use service::{DocumentRepository, DocumentService};
pub use types::{CreateDocumentInput, Document, UploadDocumentInput};
