use clap::{Args, Subcommand, ValueEnum};

use crate::config::Config;

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show current configuration values
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl ConfigCommand {
    pub fn run(&self, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ConfigSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(config)?);
                    }
                    OutputFormat::Text => {
                        println!("Configuration");
                        println!("=============\n");

                        if let Some(path) = &config.config_file {
                            println!("Config file: {}", path.display());
                        } else {
                            println!(
                                "Config file: {} (not found)",
                                Config::default_config_path().display()
                            );
                        }
                        println!();

                        println!(
                            "endpoint:    {}",
                            config.endpoint.as_deref().unwrap_or("(not set)")
                        );
                        println!(
                            "project_id:  {}",
                            config.project_id.as_deref().unwrap_or("(not set)")
                        );
                        println!("platform:    {}", config.platform);
                        println!("database_id: {}", config.database_id);
                        println!("bucket_id:   {}", config.bucket_id);
                        println!();

                        println!("collections:");
                        for (label, collection) in config.collections.all() {
                            println!("  {:<20} {}", label, collection);
                        }
                    }
                }
                Ok(())
            }
        }
    }
}
