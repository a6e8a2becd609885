use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Ids of the document collections the storefront uses.
///
/// Defaults match the collection names, which is how a fresh backend
/// project is usually laid out; hosted projects with generated ids set
/// these in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Collections {
    pub users: String,
    pub categories: String,
    pub menu: String,
    pub customizations: String,
    pub menu_customizations: String,
}

impl Default for Collections {
    fn default() -> Self {
        Self {
            users: "users".to_string(),
            categories: "categories".to_string(),
            menu: "menu".to_string(),
            customizations: "customizations".to_string(),
            menu_customizations: "menu_customizations".to_string(),
        }
    }
}

impl Collections {
    /// The catalog collections a seeding run wipes and repopulates,
    /// in wipe order. The users collection is never touched.
    pub fn seeded(&self) -> [&str; 4] {
        [
            &self.categories,
            &self.customizations,
            &self.menu,
            &self.menu_customizations,
        ]
    }

    pub fn all(&self) -> [(&'static str, &str); 5] {
        [
            ("users", &self.users),
            ("categories", &self.categories),
            ("menu", &self.menu),
            ("customizations", &self.customizations),
            ("menu_customizations", &self.menu_customizations),
        ]
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Backend base URL (e.g., "https://backend.example.com/v1")
    pub endpoint: Option<String>,
    /// Project identifier sent with every request
    pub project_id: Option<String>,
    /// Platform identifier sent with every request
    pub platform: String,
    /// Database holding the storefront collections
    pub database_id: String,
    /// Bucket holding menu images
    pub bucket_id: String,
    /// Collection ids
    pub collections: Collections,
    /// Config file path used (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<PathBuf>,
}

/// Internal struct for deserializing the config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    endpoint: Option<String>,
    project_id: Option<String>,
    platform: Option<String>,
    database_id: Option<String>,
    bucket_id: Option<String>,
    collections: Option<Collections>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            project_id: None,
            platform: "dev.menusync.storefront".to_string(),
            database_id: "storefront".to_string(),
            bucket_id: "images".to_string(),
            collections: Collections::default(),
            config_file: None,
        }
    }
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config.endpoint = file.endpoint.or(config.endpoint);
            config.project_id = file.project_id.or(config.project_id);
            if let Some(platform) = file.platform {
                config.platform = platform;
            }
            if let Some(database_id) = file.database_id {
                config.database_id = database_id;
            }
            if let Some(bucket_id) = file.bucket_id {
                config.bucket_id = bucket_id;
            }
            if let Some(collections) = file.collections {
                config.collections = collections;
            }
            config.config_file = Some(path);
        }

        // Apply environment variable overrides
        if let Ok(endpoint) = std::env::var("MENUSYNC_ENDPOINT") {
            config.endpoint = Some(endpoint);
        }
        if let Ok(project_id) = std::env::var("MENUSYNC_PROJECT_ID") {
            config.project_id = Some(project_id);
        }
        if let Ok(database_id) = std::env::var("MENUSYNC_DATABASE_ID") {
            config.database_id = database_id;
        }
        if let Ok(bucket_id) = std::env::var("MENUSYNC_BUCKET_ID") {
            config.bucket_id = bucket_id;
        }

        Ok(config)
    }

    /// Returns true if the backend connection is configured (has both
    /// endpoint and project id)
    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some() && self.project_id.is_some()
    }

    /// Default config file path: ~/.config/menusync/config.yaml
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("menusync")
            .join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
