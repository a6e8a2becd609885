//! Seeding orchestrator: deterministic full rebuild of the menu catalog.
//!
//! A run wipes the four catalog collections and the image bucket, then
//! repopulates them from a fixture dataset in dependency order: categories
//! and customizations first (capturing their generated ids), then each
//! menu item with its image upload and customization link documents.
//!
//! Menu items are seeded one at a time. A failure inside one item skips
//! that item and leaves no documents for it; failures anywhere earlier
//! abort the whole run.

mod report;
mod resolver;

pub use report::{SeedReport, SkippedItem};
pub use resolver::ResolverMap;

use chrono::Utc;
use futures::future::try_join_all;

use crate::backend::{Backend, BackendError, FileInput};
use crate::config::Collections;
use crate::models::{Fixture, FixtureError, MenuItem};

/// Page size used when draining collections and the bucket.
const WIPE_PAGE_SIZE: usize = 100;

pub struct Seeder<'a, B: Backend> {
    backend: &'a B,
    collections: &'a Collections,
}

impl<'a, B: Backend> Seeder<'a, B> {
    pub fn new(backend: &'a B, collections: &'a Collections) -> Self {
        Self {
            backend,
            collections,
        }
    }

    /// Runs a full catalog rebuild from the given fixture.
    pub async fn seed(&self, fixture: &Fixture) -> Result<SeedReport, SeedError> {
        // A broken fixture must fail before anything is wiped.
        fixture.validate()?;

        let mut report = SeedReport::default();

        for collection in self.collections.seeded() {
            report.documents_removed += self.clear_collection(collection).await?;
        }
        report.files_removed = self.clear_bucket().await?;

        let mut categories = ResolverMap::new("category");
        for category in &fixture.categories {
            let doc = self
                .backend
                .create_document(
                    &self.collections.categories,
                    &self.backend.unique_id(),
                    serde_json::json!({
                        "name": category.name,
                        "description": category.description,
                    }),
                )
                .await?;
            categories.insert(&category.name, doc.id);
        }
        report.categories_created = categories.len();

        let mut customizations = ResolverMap::new("customization");
        for customization in &fixture.customizations {
            let doc = self
                .backend
                .create_document(
                    &self.collections.customizations,
                    &self.backend.unique_id(),
                    serde_json::json!({
                        "name": customization.name,
                        "price": customization.price,
                        "type": customization.kind.to_string(),
                    }),
                )
                .await?;
            customizations.insert(&customization.name, doc.id);
        }
        report.customizations_created = customizations.len();

        for item in &fixture.menu {
            match self.seed_menu_item(item, &categories, &customizations).await {
                Ok(links) => {
                    report.menu_items_created += 1;
                    report.links_created += links;
                    tracing::info!("Seeded menu item '{}'", item.name);
                }
                Err(e) => {
                    tracing::warn!("Skipping menu item '{}': {}", item.name, e);
                    report.skipped.push(SkippedItem {
                        name: item.name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            "Seeding complete: {} categories, {} customizations, {} menu items, {} links, {} skipped",
            report.categories_created,
            report.customizations_created,
            report.menu_items_created,
            report.links_created,
            report.skipped.len()
        );

        Ok(report)
    }

    /// Deletes every document in a collection, one listing page at a time.
    ///
    /// Deletes within a page run concurrently and the first failure aborts
    /// the run. Listing repeats until the collection reports empty, so
    /// collections larger than the backend's page size still drain fully.
    async fn clear_collection(&self, collection: &str) -> Result<usize, SeedError> {
        let mut removed = 0;
        loop {
            let page = self
                .backend
                .list_documents(collection, WIPE_PAGE_SIZE, 0)
                .await?;
            if page.documents.is_empty() {
                break;
            }

            try_join_all(
                page.documents
                    .iter()
                    .map(|doc| self.backend.delete_document(collection, &doc.id)),
            )
            .await?;

            removed += page.documents.len();
            tracing::debug!(
                "Deleted {} document(s) from '{}'",
                page.documents.len(),
                collection
            );
        }
        Ok(removed)
    }

    /// Same contract as [`Self::clear_collection`], over the image bucket.
    async fn clear_bucket(&self) -> Result<usize, SeedError> {
        let mut removed = 0;
        loop {
            let page = self.backend.list_files(WIPE_PAGE_SIZE, 0).await?;
            if page.files.is_empty() {
                break;
            }

            try_join_all(
                page.files
                    .iter()
                    .map(|file| self.backend.delete_file(&file.id)),
            )
            .await?;

            removed += page.files.len();
            tracing::debug!("Deleted {} file(s) from bucket", page.files.len());
        }
        Ok(removed)
    }

    /// Seeds one menu item: image upload, menu document, link documents.
    ///
    /// Every reference is resolved before the first write so a bad name
    /// leaves no partial documents behind. Returns the number of link
    /// documents created.
    async fn seed_menu_item(
        &self,
        item: &MenuItem,
        categories: &ResolverMap,
        customizations: &ResolverMap,
    ) -> Result<usize, SeedError> {
        let category_id = categories.resolve(&item.category_name)?.to_string();
        let mut customization_ids = Vec::with_capacity(item.customizations.len());
        for name in &item.customizations {
            customization_ids.push(customizations.resolve(name)?.to_string());
        }

        let image_url = self.upload_image(&item.image_url).await?;

        let menu_doc = self
            .backend
            .create_document(
                &self.collections.menu,
                &self.backend.unique_id(),
                serde_json::json!({
                    "name": item.name,
                    "description": item.description,
                    "image_url": image_url,
                    "price": item.price,
                    "rating": item.rating,
                    "calories": item.calories,
                    "protein": item.protein,
                    "category": category_id,
                }),
            )
            .await?;

        for customization_id in &customization_ids {
            self.backend
                .create_document(
                    &self.collections.menu_customizations,
                    &self.backend.unique_id(),
                    serde_json::json!({
                        "menu": menu_doc.id,
                        "customization": customization_id,
                    }),
                )
                .await?;
        }

        Ok(customization_ids.len())
    }

    /// Fetches a source image and stores it in the bucket, returning the
    /// stored copy's view URL.
    async fn upload_image(&self, source_url: &str) -> Result<String, SeedError> {
        let image = self.backend.fetch_image(source_url).await?;

        let content_type = image
            .content_type
            .unwrap_or_else(|| "image/png".to_string());
        let name = format!(
            "img-{}.{}",
            Utc::now().timestamp_millis(),
            extension_for(&content_type)
        );

        let file = self
            .backend
            .create_file(
                &self.backend.unique_id(),
                FileInput {
                    name,
                    content_type,
                    bytes: image.bytes,
                },
            )
            .await?;

        Ok(self.backend.file_view_url(&file.id))
    }
}

fn extension_for(content_type: &str) -> &str {
    match content_type {
        "image/jpeg" => "jpg",
        "image/svg+xml" => "svg",
        _ => content_type.strip_prefix("image/").unwrap_or("png"),
    }
}

/// Errors that abort a seeding run.
#[derive(Debug)]
pub enum SeedError {
    /// The fixture failed to load or validate
    Fixture(FixtureError),
    /// A backend operation failed
    Backend(BackendError),
    /// A name was not created earlier in the same run
    UnresolvedReference { entity: &'static str, name: String },
}

impl std::fmt::Display for SeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedError::Fixture(e) => write!(f, "Fixture error: {}", e),
            SeedError::Backend(e) => write!(f, "{}", e),
            SeedError::UnresolvedReference { entity, name } => {
                write!(f, "No {} named '{}' was created in this run", entity, name)
            }
        }
    }
}

impl std::error::Error for SeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeedError::Fixture(e) => Some(e),
            SeedError::Backend(e) => Some(e),
            SeedError::UnresolvedReference { .. } => None,
        }
    }
}

impl From<FixtureError> for SeedError {
    fn from(e: FixtureError) -> Self {
        SeedError::Fixture(e)
    }
}

impl From<BackendError> for SeedError {
    fn from(e: BackendError) -> Self {
        SeedError::Backend(e)
    }
}
