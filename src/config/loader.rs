use std::path::{Path, PathBuf};
use log::debug;

use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{BoxResult, WikitocError};
use crate::utils::fs::read_file;

/// Configuration file names to look for
const CONFIG_FILES: [&str; 3] = ["wikitoc.yml", "wikitoc.yaml", "wikitoc.toml"];

/// Load configuration from an explicit file, or from the first default
/// config file found in the working directory, falling back to defaults
pub fn load_config(config_file: Option<&PathBuf>) -> BoxResult<Config> {
    let config = match config_file {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            parse_config_file(path)?
        }
        None => match find_default_config_file() {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                parse_config_file(&path)?
            }
            None => {
                debug!("No configuration file found, using defaults");
                Config::default()
            }
        },
    };

    validation::validate_config(&config)?;
    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

fn find_default_config_file() -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

/// Parse a configuration file based on its extension
fn parse_config_file(path: &Path) -> BoxResult<Config> {
    if !path.exists() {
        return Err(WikitocError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        ))
        .into());
    }

    let content = read_file(path).map_err(|e| {
        WikitocError::Config(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yml" | "yaml" => serde_yaml::from_str(&content).map_err(|e| {
            WikitocError::Config(format!("Invalid YAML in {}: {}", path.display(), e)).into()
        }),
        "toml" => toml::from_str(&content).map_err(|e| {
            WikitocError::Config(format!("Invalid TOML in {}: {}", path.display(), e)).into()
        }),
        other => Err(WikitocError::Config(format!(
            "Unsupported configuration format '{}' for {}",
            other,
            path.display()
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fs::write_file;

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let missing = PathBuf::from("/nonexistent/wikitoc.yml");
        assert!(load_config(Some(&missing)).is_err());
    }

    #[test]
    fn test_load_yaml_config() {
        let dir = std::env::temp_dir().join("wikitoc-config-yaml");
        let path = dir.join("wikitoc.yml");
        write_file(&path, "default_language: fr\ntimeout_secs: 5\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.default_language, "fr");
        assert_eq!(config.timeout_secs, 5);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_toml_config() {
        let dir = std::env::temp_dir().join("wikitoc-config-toml");
        let path = dir.join("wikitoc.toml");
        write_file(&path, "rtl_languages = [\"ar\", \"he\", \"fa\"]\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.rtl_languages, vec!["ar", "he", "fa"]);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_unsupported_extension_is_an_error() {
        let dir = std::env::temp_dir().join("wikitoc-config-ext");
        let path = dir.join("wikitoc.ini");
        write_file(&path, "endpoint=x").unwrap();
        assert!(load_config(Some(&path)).is_err());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
