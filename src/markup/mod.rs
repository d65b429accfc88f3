use std::fmt::Write as _;

/// A node in a markup tree.
///
/// `Text` is escaped on serialization; `Raw` is emitted verbatim and is the
/// only unescaped path into the output. It exists for fragment HTML that the
/// upstream content source has already sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Raw(String),
}

/// An element with a tag name, attributes and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

/// Create an element node in a declarative style
pub fn elt(tag: &str, attrs: &[(&str, &str)], children: Vec<Node>) -> Node {
    Node::Element(Element {
        tag: tag.to_string(),
        attrs: attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        children,
    })
}

/// Create a text node (escaped on serialization)
pub fn text(content: &str) -> Node {
    Node::Text(content.to_string())
}

/// Create a raw node (emitted verbatim, trusted content only)
pub fn raw(content: &str) -> Node {
    Node::Raw(content.to_string())
}

impl Node {
    /// Serialize this node and its subtree to an HTML string.
    ///
    /// Attribute values and text content are escaped; serialization is
    /// deterministic, so the same tree always yields the same string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(content) => {
                out.push_str(&html_escape::encode_text(content));
            }
            Node::Raw(content) => {
                out.push_str(content);
            }
            Node::Element(element) => {
                let _ = write!(out, "<{}", element.tag);
                for (name, value) in &element.attrs {
                    let _ = write!(
                        out,
                        " {}=\"{}\"",
                        name,
                        html_escape::encode_double_quoted_attribute(value)
                    );
                }
                out.push('>');
                for child in &element.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_serialization() {
        let node = elt(
            "a",
            &[("href", "https://example.org#a"), ("target", "_blank")],
            vec![text("Link")],
        );
        assert_eq!(
            node.to_html(),
            "<a href=\"https://example.org#a\" target=\"_blank\">Link</a>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let node = elt("li", &[], vec![text("a < b & c")]);
        assert_eq!(node.to_html(), "<li>a &lt; b &amp; c</li>");
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let node = elt("a", &[("href", "x\"y")], vec![]);
        assert_eq!(node.to_html(), "<a href=\"x&quot;y\"></a>");
    }

    #[test]
    fn test_raw_passes_through_verbatim() {
        let node = elt("a", &[], vec![raw("<b>Bold</b>")]);
        assert_eq!(node.to_html(), "<a><b>Bold</b></a>");
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let node = elt("ol", &[], vec![elt("li", &[], vec![text("one")])]);
        assert_eq!(node.to_html(), node.to_html());
    }
}
