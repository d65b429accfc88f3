use lazy_static::lazy_static;
use regex::Regex;

use crate::config::Config;
use crate::utils::error::{BoxResult, WikitocError};

lazy_static! {
    // BCP-47-ish language codes as Wikipedia uses them in subdomains
    static ref LANGUAGE_CODE_REGEX: Regex =
        Regex::new(r"^[a-z]{2,3}(-[a-z0-9]{2,8})*$").unwrap();
}

/// Validate the configuration
pub fn validate_config(config: &Config) -> BoxResult<()> {
    validate_endpoint(config)?;
    validate_timeout(config)?;
    validate_languages(config)?;
    Ok(())
}

/// The endpoint pattern must carry the language placeholder, otherwise every
/// language would hit the same origin
fn validate_endpoint(config: &Config) -> BoxResult<()> {
    if !config.endpoint.contains("{language}") {
        return Err(WikitocError::Config(format!(
            "Endpoint pattern must contain {{language}}: {}",
            config.endpoint
        ))
        .into());
    }
    if !config.endpoint.starts_with("http://") && !config.endpoint.starts_with("https://") {
        return Err(WikitocError::Config(format!(
            "Endpoint pattern must be an http(s) origin: {}",
            config.endpoint
        ))
        .into());
    }
    Ok(())
}

fn validate_timeout(config: &Config) -> BoxResult<()> {
    if config.timeout_secs == 0 {
        return Err(WikitocError::Config("Request timeout must be greater than zero".into()).into());
    }
    Ok(())
}

fn validate_languages(config: &Config) -> BoxResult<()> {
    for code in std::iter::once(&config.default_language).chain(config.rtl_languages.iter()) {
        if !LANGUAGE_CODE_REGEX.is_match(code) {
            return Err(WikitocError::Config(format!(
                "Invalid language code in configuration: {:?}",
                code
            ))
            .into());
        }
    }
    Ok(())
}
