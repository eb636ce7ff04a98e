//! Document file storage using Apache OpenDAL.
//!
//! Uploaded files are written under a generated key, never under the name
//! the client sent. The operator is rooted at the configured upload
//! directory:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               Apache OpenDAL (Fs)              │
//! ├──────────────────────────────────────────────┤
//! │ op.write(key, data)   │ op.stat(key)          │
//! │ op.read(key)          │ op.delete(key)        │
//! └──────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod service;

pub use config::StorageConfig;
pub use error::StorageError;
pub use service::{StorageService, StoredFile};
