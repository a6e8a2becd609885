//! The `status` command: backend connectivity and collection counts.

use clap::Args;

use crate::backend::{Backend, BackendError, HttpBackend};
use crate::config::Config;

/// Show backend connectivity and per-collection document counts
#[derive(Args)]
pub struct StatusCommand {}

impl StatusCommand {
    pub async fn run(&self, config: &Config) -> Result<(), StatusCommandError> {
        println!("Backend");
        println!("=======");
        println!();

        if !config.is_configured() {
            println!("Status: Not configured");
            println!();
            println!("To connect, add to your config file:");
            println!();
            println!("  endpoint: \"https://backend.example.com/v1\"");
            println!("  project_id: \"your-project-id\"");
            println!();
            println!("Or set environment variables:");
            println!("  MENUSYNC_ENDPOINT");
            println!("  MENUSYNC_PROJECT_ID");
            return Ok(());
        }

        println!("Endpoint: {}", config.endpoint.as_deref().unwrap_or(""));
        println!("Database: {}", config.database_id);
        println!("Bucket:   {}", config.bucket_id);
        println!();

        let backend = HttpBackend::from_config(config)?;

        // A failing collection is reported inline; the rest still print.
        for (label, collection) in config.collections.all() {
            match backend.list_documents(collection, 1, 0).await {
                Ok(list) => println!("  ✓ {:<22} {} document(s)", label, list.total),
                Err(e) => println!("  ✗ {:<22} {}", label, e),
            }
        }

        match backend.list_files(1, 0).await {
            Ok(list) => println!("  ✓ {:<22} {} file(s)", "images", list.total),
            Err(e) => println!("  ✗ {:<22} {}", "images", e),
        }

        Ok(())
    }
}

/// Errors from the status command
#[derive(Debug)]
pub enum StatusCommandError {
    Backend(BackendError),
}

impl std::fmt::Display for StatusCommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusCommandError::Backend(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StatusCommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatusCommandError::Backend(e) => Some(e),
        }
    }
}

impl From<BackendError> for StatusCommandError {
    fn from(e: BackendError) -> Self {
        StatusCommandError::Backend(e)
    }
}
