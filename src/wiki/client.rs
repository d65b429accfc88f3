use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::config::Config;
use crate::utils::error::{BoxResult, WikitocError};
use crate::wiki::types::{MetadataResponse, TocPayload};

/// Client for the wiki REST metadata API
#[derive(Debug, Clone)]
pub struct WikiClient {
    client: Client,
    endpoint: String,
}

impl WikiClient {
    pub fn new(config: &Config) -> BoxResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| WikitocError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Origin for the given language, from the configured endpoint pattern
    fn origin(&self, language: &str) -> String {
        self.endpoint.replace("{language}", language)
    }

    /// URL of the metadata API resource for an article
    pub fn api_url(&self, language: &str, query: &str) -> String {
        format!(
            "{}/api/rest_v1/page/metadata/{}",
            self.origin(language),
            urlencoding::encode(query)
        )
    }

    /// URL of the human-readable article, used as the base of anchor links
    pub fn article_url(&self, language: &str, query: &str) -> String {
        format!("{}/wiki/{}", self.origin(language), urlencoding::encode(query))
    }

    /// Fetch the table of contents for an article.
    ///
    /// The API signals failure in-band: a response without a `toc` object
    /// carries the reason in `detail`, which is surfaced as an API error.
    /// Transport and decode failures become HTTP errors.
    pub async fn fetch_toc(&self, language: &str, query: &str) -> BoxResult<TocPayload> {
        let url = self.api_url(language, query);
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WikitocError::Http(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        let metadata: MetadataResponse = response
            .json()
            .await
            .map_err(|e| WikitocError::Http(format!("Invalid response from {} ({}): {}", url, status, e)))?;

        match metadata.toc {
            Some(toc) => Ok(toc),
            None => Err(WikitocError::Api(
                metadata
                    .detail
                    .unwrap_or_else(|| format!("No table of contents in response ({})", status)),
            )
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> WikiClient {
        WikiClient::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_api_url() {
        assert_eq!(
            client().api_url("en", "Rust"),
            "https://en.wikipedia.org/api/rest_v1/page/metadata/Rust"
        );
    }

    #[test]
    fn test_article_url() {
        assert_eq!(
            client().article_url("de", "Rost"),
            "https://de.wikipedia.org/wiki/Rost"
        );
    }

    #[test]
    fn test_query_is_percent_encoded() {
        assert_eq!(
            client().api_url("en", "C (programming language)"),
            "https://en.wikipedia.org/api/rest_v1/page/metadata/C%20%28programming%20language%29"
        );
    }

    #[test]
    fn test_custom_endpoint_pattern() {
        let mut config = Config::default();
        config.endpoint = "https://{language}.wiktionary.org".to_string();
        let client = WikiClient::new(&config).unwrap();
        assert_eq!(
            client.article_url("fr", "rouille"),
            "https://fr.wiktionary.org/wiki/rouille"
        );
    }
}
