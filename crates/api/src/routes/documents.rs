//! Document routes.
//!
//! Uploads arrive as multipart form data with a single `file` field. Every
//! lookup is scoped to the caller's agency.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State},
    http::{
        HeaderValue, StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::IntoResponse,
    routing::{get, post},
};
use bytes::Bytes;
use serde::Deserialize;

use crate::{AppState, error::ApiError, middleware::CurrentRealtor};
use realty_core::document::{Document, DocumentService, UploadDocumentInput};
use realty_db::{DocumentRepository, PropertyRepository};

/// Creates the document routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/documents", get(list_documents))
        .route("/documents/upload", post(upload_document))
        .route(
            "/documents/{document_id}",
            get(get_document).delete(delete_document),
        )
        .route("/documents/{document_id}/download", get(download_document))
}

fn document_service(state: &AppState) -> DocumentService<DocumentRepository> {
    DocumentService::new(
        state.storage.clone(),
        Arc::new(DocumentRepository::new((*state.db).clone())),
    )
}

/// Query parameters for an upload.
#[derive(Debug, Default, Deserialize)]
pub struct UploadQuery {
    /// Listing the document belongs to.
    #[serde(default)]
    pub property_id: Option<i32>,
}

/// Reads the `file` field of a multipart body.
async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Bytes), ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field
            .file_name()
            .map(ToString::to_string)
            .ok_or_else(|| ApiError::validation("file field has no filename"))?;
        let data = field.bytes().await?;
        return Ok((filename, data));
    }
    Err(ApiError::validation("multipart field 'file' is required"))
}

/// POST /documents/upload - Store a file for the caller's agency.
async fn upload_document(
    State(state): State<AppState>,
    current: CurrentRealtor,
    Query(query): Query<UploadQuery>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Document>), ApiError> {
    if let Some(property_id) = query.property_id {
        PropertyRepository::new((*state.db).clone())
            .find_by_id(property_id)
            .await?
            .filter(|property| property.agency_id == current.agency_id())
            .ok_or_else(|| ApiError::not_found("Property"))?;
    }

    let (filename, data) = read_file_field(&mut multipart).await?;

    let document = document_service(&state)
        .upload(UploadDocumentInput {
            filename,
            data,
            realtor_id: current.id(),
            agency_id: current.agency_id(),
            property_id: query.property_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(document)))
}

/// GET /documents - The caller's agency documents, newest first.
async fn list_documents(
    State(state): State<AppState>,
    current: CurrentRealtor,
) -> Result<Json<Vec<Document>>, ApiError> {
    let documents = document_service(&state).list(current.agency_id()).await?;
    Ok(Json(documents))
}

/// GET /documents/{document_id} - Document metadata.
async fn get_document(
    State(state): State<AppState>,
    current: CurrentRealtor,
    Path(document_id): Path<i32>,
) -> Result<Json<Document>, ApiError> {
    let document = document_service(&state)
        .get(document_id, current.agency_id())
        .await?;
    Ok(Json(document))
}

/// GET /documents/{document_id}/download - The stored bytes.
async fn download_document(
    State(state): State<AppState>,
    current: CurrentRealtor,
    Path(document_id): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let (document, data) = document_service(&state)
        .download(document_id, current.agency_id())
        .await?;

    let headers = [
        (
            CONTENT_TYPE,
            HeaderValue::from_static("application/octet-stream"),
        ),
        (CONTENT_DISPOSITION, content_disposition(&document.filename)),
    ];
    Ok((headers, data))
}

/// DELETE /documents/{document_id} - Delete the record and its stored file.
async fn delete_document(
    State(state): State<AppState>,
    current: CurrentRealtor,
    Path(document_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    document_service(&state)
        .delete(document_id, current.agency_id())
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

fn content_disposition(filename: &str) -> HeaderValue {
    let safe: String = filename
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();
    HeaderValue::from_str(&format!("attachment; filename=\"{safe}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_disposition_escapes_name() {
        assert_eq!(
            content_disposition("lease.pdf"),
            "attachment; filename=\"lease.pdf\""
        );
        assert_eq!(
            content_disposition("a\"b\r\n.pdf"),
            "attachment; filename=\"a_b__.pdf\""
        );
        assert_eq!(
            content_disposition("plan \u{e9}.png"),
            "attachment; filename=\"plan _.png\""
        );
    }
}
