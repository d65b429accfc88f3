use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::defaults;

/// Wikitoc configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Origin pattern for the wiki; `{language}` is replaced by the
    /// selected language code
    #[serde(default = "defaults::default_endpoint")]
    pub endpoint: String,

    /// Language used when the caller does not select one
    #[serde(default = "defaults::default_language")]
    pub default_language: String,

    /// Languages displayed right-to-left
    #[serde(default = "defaults::default_rtl_languages")]
    pub rtl_languages: Vec<String>,

    /// Request timeout in seconds
    #[serde(default = "defaults::default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with API requests
    #[serde(default = "defaults::default_user_agent")]
    pub user_agent: String,

    /// Default output path for the generated page
    #[serde(default = "defaults::default_output")]
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: defaults::default_endpoint(),
            default_language: defaults::default_language(),
            rtl_languages: defaults::default_rtl_languages(),
            timeout_secs: defaults::default_timeout_secs(),
            user_agent: defaults::default_user_agent(),
            output: defaults::default_output(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.endpoint, "https://{language}.wikipedia.org");
        assert_eq!(config.default_language, "en");
        assert_eq!(config.rtl_languages, vec!["ar", "he"]);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let config: Config = serde_yaml::from_str("default_language: de\n").unwrap();
        assert_eq!(config.default_language, "de");
        assert_eq!(config.endpoint, "https://{language}.wikipedia.org");
    }
}
