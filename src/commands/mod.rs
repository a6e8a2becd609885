mod config_cmd;
mod seed_cmd;
mod status_cmd;

pub use config_cmd::{ConfigCommand, OutputFormat};
pub use seed_cmd::SeedCommand;
pub use status_cmd::StatusCommand;
