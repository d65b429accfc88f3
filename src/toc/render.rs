use crate::markup::{self, Node};
use crate::toc::types::TocNode;

/// Recursively render a table-of-contents node into nested ordered-list
/// markup.
///
/// A node with no children renders to `None`; that is the base case of the
/// recursion, and it also means a tree holding only the synthetic root
/// produces no markup at all. Otherwise each child becomes a list item with
/// a deep link to `article_url` plus the child's anchor fragment, followed by
/// the rendered sublist for the child's own children.
///
/// The child's `html` fragment is injected verbatim inside the link: the
/// upstream API is trusted to deliver sanitized fragments, and this is the
/// only place the trusted-content channel of the markup tree is used.
pub fn render_toc(node: &TocNode, article_url: &str) -> Option<Node> {
    if node.children.is_empty() {
        return None;
    }

    let items = node
        .children
        .iter()
        .map(|child| {
            let href = format!("{}#{}", article_url, child.anchor);
            // target=_blank links must not hand the opener back to the
            // opened page
            let mut li_children = vec![markup::elt(
                "a",
                &[
                    ("href", href.as_str()),
                    ("target", "_blank"),
                    ("rel", "noopener noreferrer"),
                ],
                vec![markup::raw(&child.html)],
            )];
            if let Some(sublist) = render_toc(child, article_url) {
                li_children.push(sublist);
            }
            markup::elt("li", &[], li_children)
        })
        .collect();

    Some(markup::elt("ol", &[], items))
}
