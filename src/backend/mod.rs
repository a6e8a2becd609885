//! Client layer for the managed backend hosting the storefront.
//!
//! The backend exposes a document store (collections of records addressed
//! by generated ids) and a blob store (image files resolvable to view
//! URLs) over HTTP. The [`Backend`] trait is the surface seeding needs;
//! [`HttpBackend`] is the wire implementation.

mod http;
#[cfg(test)]
pub mod memory;

pub use http::HttpBackend;

use serde::Deserialize;

/// A record stored in a named collection.
#[derive(Debug, Clone, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// One page of a collection listing. `total` counts the whole collection,
/// not the page.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentList {
    pub total: usize,
    pub documents: Vec<Document>,
}

/// A stored blob object.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredFile {
    pub id: String,
    pub name: String,
    pub size: usize,
}

/// One page of a bucket listing.
#[derive(Debug, Clone, Deserialize)]
pub struct FileList {
    pub total: usize,
    pub files: Vec<StoredFile>,
}

/// A blob to store, with the metadata the backend requires.
#[derive(Debug, Clone)]
pub struct FileInput {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Bytes fetched from a source image URL.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

/// The backend surface the seeding orchestrator runs against.
///
/// Listing calls are paginated; callers that need the full contents must
/// iterate until a page comes back empty.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Generates a collision-resistant unique id for a new document or file.
    fn unique_id(&self) -> String;

    async fn list_documents(
        &self,
        collection: &str,
        limit: usize,
        offset: usize,
    ) -> Result<DocumentList, BackendError>;

    async fn create_document(
        &self,
        collection: &str,
        id: &str,
        data: serde_json::Value,
    ) -> Result<Document, BackendError>;

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), BackendError>;

    async fn list_files(&self, limit: usize, offset: usize) -> Result<FileList, BackendError>;

    async fn create_file(&self, id: &str, input: FileInput) -> Result<StoredFile, BackendError>;

    async fn delete_file(&self, id: &str) -> Result<(), BackendError>;

    /// The publicly resolvable view URL for a stored file.
    fn file_view_url(&self, id: &str) -> String;

    /// Retrieves source image bytes for ingestion into the blob store.
    async fn fetch_image(&self, url: &str) -> Result<ImageData, BackendError>;
}

/// Errors from backend operations.
#[derive(Debug)]
pub enum BackendError {
    /// Endpoint or project id missing from config
    NotConfigured,
    /// Transport-level failure (connection, TLS, timeout)
    HttpError(String),
    /// The backend rejected the operation
    ApiError {
        status: u16,
        kind: String,
        message: String,
    },
    /// Response body did not match the expected shape
    DecodeError(String),
}

impl std::fmt::Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendError::NotConfigured => write!(
                f,
                "Backend not configured. Set endpoint and project_id in config."
            ),
            BackendError::HttpError(e) => write!(f, "HTTP error: {}", e),
            BackendError::ApiError {
                status,
                kind,
                message,
            } => write!(f, "Backend error ({} {}): {}", status, kind, message),
            BackendError::DecodeError(e) => write!(f, "Decode error: {}", e),
        }
    }
}

impl std::error::Error for BackendError {}
