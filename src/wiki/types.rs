use serde::Deserialize;

use crate::toc::Entry;

/// The `toc` object of the page metadata payload: document-level metadata
/// plus the flat entry sequence
#[derive(Debug, Clone, Deserialize)]
pub struct TocPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// Page metadata response. A present `toc` means success; otherwise the API
/// puts the human-readable failure reason in `detail`.
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataResponse {
    #[serde(default)]
    pub toc: Option<TocPayload>,
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_successful_payload() {
        let json = r#"{
            "toc": {
                "title": "Rust (programming language)",
                "entries": [
                    {"level": 1, "anchor": "History", "html": "History", "number": "1"},
                    {"level": 2, "anchor": "Origins", "html": "<i>Origins</i>"}
                ]
            }
        }"#;
        let response: MetadataResponse = serde_json::from_str(json).unwrap();
        let toc = response.toc.unwrap();
        assert_eq!(toc.title.as_deref(), Some("Rust (programming language)"));
        assert_eq!(toc.entries.len(), 2);
        assert_eq!(toc.entries[0].level, 1);
        assert_eq!(toc.entries[0].number.as_deref(), Some("1"));
        assert_eq!(toc.entries[1].anchor, "Origins");
        assert!(toc.entries[1].number.is_none());
    }

    #[test]
    fn test_decode_error_payload() {
        let json = r#"{"type": "about:blank", "detail": "Page not found"}"#;
        let response: MetadataResponse = serde_json::from_str(json).unwrap();
        assert!(response.toc.is_none());
        assert_eq!(response.detail.as_deref(), Some("Page not found"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{
            "toc": {"entries": [{"level": 1, "anchor": "a", "html": "A", "byteoffset": 12}]},
            "revision": "12345"
        }"#;
        let response: MetadataResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.toc.unwrap().entries.len(), 1);
    }
}
