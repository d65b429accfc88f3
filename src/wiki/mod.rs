mod client;
mod types;

pub use client::WikiClient;
pub use types::{MetadataResponse, TocPayload};

/// Whether a language is displayed right-to-left, by membership in the
/// configured set
pub fn is_rtl(language: &str, rtl_languages: &[String]) -> bool {
    rtl_languages.iter().any(|code| code == language)
}
