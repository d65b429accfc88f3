use std::path::PathBuf;

use log::error;

use crate::cli::types::Commands;
use crate::config;

pub async fn handle_config_command(command: &Commands, config_file: Option<&PathBuf>) {
    if let Commands::Config {} = command {
        match config::load_config(config_file) {
            Ok(cfg) => {
                let yaml = serde_yaml::to_string(&cfg).unwrap_or_default();
                println!("{}", yaml);
            }
            Err(e) => error!("Failed to load configuration: {}", e),
        }
    }
}
