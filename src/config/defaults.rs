use std::path::PathBuf;

pub fn default_endpoint() -> String {
    "https://{language}.wikipedia.org".to_string()
}

pub fn default_language() -> String {
    "en".to_string()
}

pub fn default_rtl_languages() -> Vec<String> {
    vec!["ar".to_string(), "he".to_string()]
}

pub fn default_timeout_secs() -> u64 {
    30
}

pub fn default_user_agent() -> String {
    format!("wikitoc/{}", env!("CARGO_PKG_VERSION"))
}

pub fn default_output() -> PathBuf {
    PathBuf::from("./wikitoc.html")
}
