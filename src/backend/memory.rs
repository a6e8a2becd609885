//! In-memory stand-in for the managed backend, used by orchestrator tests.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{
    Backend, BackendError, Document, DocumentList, FileInput, FileList, ImageData, StoredFile,
};

#[derive(Default)]
pub struct MemoryBackend {
    next_id: AtomicUsize,
    documents: Mutex<HashMap<String, Vec<Document>>>,
    files: Mutex<Vec<StoredFile>>,
    fail_delete_in: Mutex<HashSet<String>>,
    fail_fetch: Mutex<HashSet<String>>,
    page_cap: Mutex<Option<usize>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn docs(&self, collection: &str) -> Vec<Document> {
        self.documents
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn doc_count(&self, collection: &str) -> usize {
        self.docs(collection).len()
    }

    pub fn stored_files(&self) -> Vec<StoredFile> {
        self.files.lock().unwrap().clone()
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    /// Makes every delete in the given collection fail.
    pub fn fail_deletes_in(&self, collection: &str) {
        self.fail_delete_in
            .lock()
            .unwrap()
            .insert(collection.to_string());
    }

    /// Makes fetching the given source image URL fail.
    pub fn fail_fetch_of(&self, url: &str) {
        self.fail_fetch.lock().unwrap().insert(url.to_string());
    }

    /// Caps listing pages at `n` items regardless of the requested limit,
    /// emulating a backend with a small server-side page size.
    pub fn cap_pages(&self, n: usize) {
        *self.page_cap.lock().unwrap() = Some(n);
    }
}

impl Backend for MemoryBackend {
    fn unique_id(&self) -> String {
        format!("id-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn list_documents(
        &self,
        collection: &str,
        limit: usize,
        offset: usize,
    ) -> Result<DocumentList, BackendError> {
        let all = self.docs(collection);
        let limit = match *self.page_cap.lock().unwrap() {
            Some(cap) => limit.min(cap),
            None => limit,
        };
        Ok(DocumentList {
            total: all.len(),
            documents: all.into_iter().skip(offset).take(limit).collect(),
        })
    }

    async fn create_document(
        &self,
        collection: &str,
        id: &str,
        data: serde_json::Value,
    ) -> Result<Document, BackendError> {
        let doc = Document {
            id: id.to_string(),
            data,
        };
        self.documents
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(doc.clone());
        Ok(doc)
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), BackendError> {
        if self.fail_delete_in.lock().unwrap().contains(collection) {
            return Err(BackendError::ApiError {
                status: 500,
                kind: "server_error".to_string(),
                message: format!("delete refused for collection '{}'", collection),
            });
        }

        let mut documents = self.documents.lock().unwrap();
        let docs = documents.entry(collection.to_string()).or_default();
        match docs.iter().position(|d| d.id == id) {
            Some(index) => {
                docs.remove(index);
                Ok(())
            }
            None => Err(BackendError::ApiError {
                status: 404,
                kind: "not_found".to_string(),
                message: format!("document '{}' not found", id),
            }),
        }
    }

    async fn list_files(&self, limit: usize, offset: usize) -> Result<FileList, BackendError> {
        let all: Vec<StoredFile> = self.files.lock().unwrap().clone();
        let limit = match *self.page_cap.lock().unwrap() {
            Some(cap) => limit.min(cap),
            None => limit,
        };
        Ok(FileList {
            total: all.len(),
            files: all.into_iter().skip(offset).take(limit).collect(),
        })
    }

    async fn create_file(&self, id: &str, input: FileInput) -> Result<StoredFile, BackendError> {
        let file = StoredFile {
            id: id.to_string(),
            name: input.name,
            size: input.bytes.len(),
        };
        self.files.lock().unwrap().push(file.clone());
        Ok(file)
    }

    async fn delete_file(&self, id: &str) -> Result<(), BackendError> {
        let mut files = self.files.lock().unwrap();
        match files.iter().position(|f| f.id == id) {
            Some(index) => {
                files.remove(index);
                Ok(())
            }
            None => Err(BackendError::ApiError {
                status: 404,
                kind: "not_found".to_string(),
                message: format!("file '{}' not found", id),
            }),
        }
    }

    fn file_view_url(&self, id: &str) -> String {
        format!("memory://files/{}/view", id)
    }

    async fn fetch_image(&self, url: &str) -> Result<ImageData, BackendError> {
        if self.fail_fetch.lock().unwrap().contains(url) {
            return Err(BackendError::HttpError(format!(
                "source image '{}' unreachable",
                url
            )));
        }
        Ok(ImageData {
            bytes: vec![0x89, b'P', b'N', b'G'],
            content_type: Some("image/png".to_string()),
        })
    }
}
