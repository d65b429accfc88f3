use serde::{Deserialize, Serialize};

/// A single flat table-of-contents entry as delivered by the metadata API.
///
/// Entries arrive in document reading order; nesting is encoded implicitly
/// by `level`, which is positive but not required to start at 1 or to be
/// contiguous.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub level: u32,
    #[serde(default)]
    pub anchor: String,
    #[serde(default)]
    pub html: String,
    /// Section number as printed by the source (e.g. "1.2")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

/// One node of the nested table of contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocNode {
    pub anchor: String,
    pub html: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default)]
    pub children: Vec<TocNode>,
}

impl TocNode {
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            anchor: entry.anchor.clone(),
            html: entry.html.clone(),
            number: entry.number.clone(),
            children: Vec::new(),
        }
    }

    /// The synthetic root node. It is not a displayable entry itself; its
    /// children are the top-band entries of the document.
    pub fn synthetic_root() -> Self {
        Self {
            anchor: String::new(),
            html: String::new(),
            number: None,
            children: Vec::new(),
        }
    }

    /// Total number of entries in this subtree, excluding the node itself
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}

/// Tree form of a table of contents: document-level metadata plus the
/// synthetic root node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocTree {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub root: TocNode,
}
