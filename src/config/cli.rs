use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "contact-book")]
#[command(about = "An address book with an interactive command console")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Address book data file, overrides storage.path
    #[arg(short = 'f', long, value_name = "FILE")]
    pub data_file: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// Reads the TOML file (if any) and applies command-line overrides.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(data_file) = &self.data_file {
            tracing::debug!("🔧 Data file overridden to: {}", data_file);
            config.set_data_file(data_file.clone());
        }

        Ok(config)
    }
}
