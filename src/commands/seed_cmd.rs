//! The `seed` command: wipe and rebuild the storefront catalog.

use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

use super::OutputFormat;
use crate::backend::{BackendError, HttpBackend};
use crate::config::Config;
use crate::models::{Fixture, FixtureError};
use crate::seed::{SeedError, Seeder};

/// Wipe the catalog collections and repopulate them from a fixture dataset
#[derive(Args)]
pub struct SeedCommand {
    /// Path to a fixture JSON file (defaults to the bundled demo catalog)
    #[arg(long)]
    fixtures: Option<PathBuf>,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    yes: bool,

    /// Output format for the completion report
    #[arg(long, short, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl SeedCommand {
    pub async fn run(&self, config: &Config) -> Result<(), SeedCommandError> {
        let backend = HttpBackend::from_config(config)?;

        let fixture = match &self.fixtures {
            Some(path) => Fixture::from_path(path)?,
            None => Fixture::builtin()?,
        };

        if !self.yes && !confirm(config)? {
            println!("Aborted.");
            return Ok(());
        }

        if matches!(self.format, OutputFormat::Text) {
            println!(
                "Seeding {} categories, {} customizations, {} menu items...",
                fixture.categories.len(),
                fixture.customizations.len(),
                fixture.menu.len()
            );
            println!();
        }

        let seeder = Seeder::new(&backend, &config.collections);
        let report = seeder.seed(&fixture).await?;

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Text => print!("{}", report),
        }

        Ok(())
    }
}

/// The wipe is a full replace, so make the operator acknowledge the target.
fn confirm(config: &Config) -> Result<bool, SeedCommandError> {
    print!(
        "This deletes every catalog document and image on {} before reseeding. Continue? [y/N] ",
        config.endpoint.as_deref().unwrap_or("<unset>")
    );
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Errors from the seed command
#[derive(Debug)]
pub enum SeedCommandError {
    IoError(io::Error),
    Backend(BackendError),
    Fixture(FixtureError),
    Seed(SeedError),
    Encode(serde_json::Error),
}

impl std::fmt::Display for SeedCommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedCommandError::IoError(e) => write!(f, "I/O error: {}", e),
            SeedCommandError::Backend(e) => write!(f, "{}", e),
            SeedCommandError::Fixture(e) => write!(f, "{}", e),
            SeedCommandError::Seed(e) => write!(f, "Seeding failed: {}", e),
            SeedCommandError::Encode(e) => write!(f, "Failed to encode report: {}", e),
        }
    }
}

impl std::error::Error for SeedCommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeedCommandError::IoError(e) => Some(e),
            SeedCommandError::Backend(e) => Some(e),
            SeedCommandError::Fixture(e) => Some(e),
            SeedCommandError::Seed(e) => Some(e),
            SeedCommandError::Encode(e) => Some(e),
        }
    }
}

impl From<io::Error> for SeedCommandError {
    fn from(e: io::Error) -> Self {
        SeedCommandError::IoError(e)
    }
}

impl From<BackendError> for SeedCommandError {
    fn from(e: BackendError) -> Self {
        SeedCommandError::Backend(e)
    }
}

impl From<FixtureError> for SeedCommandError {
    fn from(e: FixtureError) -> Self {
        SeedCommandError::Fixture(e)
    }
}

impl From<SeedError> for SeedCommandError {
    fn from(e: SeedError) -> Self {
        SeedCommandError::Seed(e)
    }
}

impl From<serde_json::Error> for SeedCommandError {
    fn from(e: serde_json::Error) -> Self {
        SeedCommandError::Encode(e)
    }
}
