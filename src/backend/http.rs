//! HTTP implementation of the backend client.
//!
//! Documents live under database-scoped collection routes, files under a
//! bucket route. Every request carries the project and platform headers
//! the backend uses to attribute traffic.

use reqwest::Method;
use uuid::Uuid;

use super::{
    Backend, BackendError, Document, DocumentList, FileInput, FileList, ImageData, StoredFile,
};
use crate::config::Config;

pub struct HttpBackend {
    http: reqwest::Client,
    endpoint: String,
    project_id: String,
    platform: String,
    database_id: String,
    bucket_id: String,
}

impl HttpBackend {
    /// Creates a backend client from config.
    ///
    /// Returns an error if the endpoint or project id is not set.
    pub fn from_config(config: &Config) -> Result<Self, BackendError> {
        let endpoint = config.endpoint.clone().ok_or(BackendError::NotConfigured)?;
        let project_id = config
            .project_id
            .clone()
            .ok_or(BackendError::NotConfigured)?;

        Ok(Self::new(
            endpoint,
            project_id,
            config.platform.clone(),
            config.database_id.clone(),
            config.bucket_id.clone(),
        ))
    }

    /// Creates a backend client with explicit parameters.
    pub fn new(
        endpoint: String,
        project_id: String,
        platform: String,
        database_id: String,
        bucket_id: String,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            project_id,
            platform,
            database_id,
            bucket_id,
        }
    }

    fn documents_url(&self, collection: &str) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, self.database_id, collection
        )
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}", self.documents_url(collection), id)
    }

    fn files_url(&self) -> String {
        format!("{}/storage/buckets/{}/files", self.endpoint, self.bucket_id)
    }

    fn file_url(&self, id: &str) -> String {
        format!("{}/{}", self.files_url(), id)
    }

    fn request(&self, method: Method, url: String) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .header("X-Project-Id", &self.project_id)
            .header("X-Platform", &self.platform)
    }

    /// Maps a non-2xx response to an `ApiError` with the backend's error body.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body: serde_json::Value = response.json().await.unwrap_or_default();
        Err(BackendError::ApiError {
            status: status.as_u16(),
            kind: body["type"].as_str().unwrap_or("unknown").to_string(),
            message: body["message"]
                .as_str()
                .unwrap_or("Unknown error")
                .to_string(),
        })
    }

    async fn send(builder: reqwest::RequestBuilder) -> Result<reqwest::Response, BackendError> {
        let response = builder
            .send()
            .await
            .map_err(|e| BackendError::HttpError(e.to_string()))?;
        Self::check(response).await
    }
}

impl Backend for HttpBackend {
    fn unique_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }

    async fn list_documents(
        &self,
        collection: &str,
        limit: usize,
        offset: usize,
    ) -> Result<DocumentList, BackendError> {
        let response = Self::send(
            self.request(Method::GET, self.documents_url(collection))
                .query(&[("limit", limit), ("offset", offset)]),
        )
        .await?;

        response
            .json()
            .await
            .map_err(|e| BackendError::DecodeError(e.to_string()))
    }

    async fn create_document(
        &self,
        collection: &str,
        id: &str,
        data: serde_json::Value,
    ) -> Result<Document, BackendError> {
        let response = Self::send(
            self.request(Method::POST, self.documents_url(collection))
                .json(&serde_json::json!({ "documentId": id, "data": data })),
        )
        .await?;

        response
            .json()
            .await
            .map_err(|e| BackendError::DecodeError(e.to_string()))
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<(), BackendError> {
        Self::send(self.request(Method::DELETE, self.document_url(collection, id))).await?;
        Ok(())
    }

    async fn list_files(&self, limit: usize, offset: usize) -> Result<FileList, BackendError> {
        let response = Self::send(
            self.request(Method::GET, self.files_url())
                .query(&[("limit", limit), ("offset", offset)]),
        )
        .await?;

        response
            .json()
            .await
            .map_err(|e| BackendError::DecodeError(e.to_string()))
    }

    async fn create_file(&self, id: &str, input: FileInput) -> Result<StoredFile, BackendError> {
        let part = reqwest::multipart::Part::bytes(input.bytes)
            .file_name(input.name)
            .mime_str(&input.content_type)
            .map_err(|e| BackendError::HttpError(e.to_string()))?;
        let form = reqwest::multipart::Form::new()
            .text("fileId", id.to_string())
            .part("file", part);

        let response = Self::send(self.request(Method::POST, self.files_url()).multipart(form))
            .await?;

        response
            .json()
            .await
            .map_err(|e| BackendError::DecodeError(e.to_string()))
    }

    async fn delete_file(&self, id: &str) -> Result<(), BackendError> {
        Self::send(self.request(Method::DELETE, self.file_url(id))).await?;
        Ok(())
    }

    fn file_view_url(&self, id: &str) -> String {
        format!("{}/view?project={}", self.file_url(id), self.project_id)
    }

    async fn fetch_image(&self, url: &str) -> Result<ImageData, BackendError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| BackendError::HttpError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::HttpError(format!(
                "source image '{}' returned {}",
                url, status
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let bytes = response
            .bytes()
            .await
            .map_err(|e| BackendError::HttpError(e.to_string()))?
            .to_vec();

        Ok(ImageData {
            bytes,
            content_type,
        })
    }
}
