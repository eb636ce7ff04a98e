//! Document types.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Stored document metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Document ID.
    pub id: i32,
    /// Name the file was uploaded under.
    pub filename: String,
    /// Storage key; internal, never sent to clients.
    #[serde(skip_serializing)]
    pub filepath: String,
    /// Uploading realtor.
    pub realtor_id: i32,
    /// Owning agency.
    pub agency_id: i32,
    /// Listing the document belongs to, if any.
    pub property_id: Option<i32>,
    /// Upload time.
    pub created_at: DateTime<Utc>,
}

/// An upload received from a realtor.
#[derive(Debug, Clone)]
pub struct UploadDocumentInput {
    /// Client-supplied filename.
    pub filename: String,
    /// File contents.
    pub data: Bytes,
    /// Uploading realtor.
    pub realtor_id: i32,
    /// The realtor's agency.
    pub agency_id: i32,
    /// Optional listing.
    pub property_id: Option<i32>,
}

/// Input for creating a document record.
#[derive(Debug, Clone)]
pub struct CreateDocumentInput {
    /// Client-supplied filename.
    pub filename: String,
    /// Storage key the bytes were written under.
    pub filepath: String,
    /// Uploading realtor.
    pub realtor_id: i32,
    /// Owning agency.
    pub agency_id: i32,
    /// Optional listing.
    pub property_id: Option<i32>,
}
