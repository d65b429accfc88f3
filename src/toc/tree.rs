use crate::toc::types::{Entry, TocNode, TocTree};

/// Build a nested table-of-contents tree from a flat, level-annotated entry
/// sequence.
///
/// Keeps a stack of `(level, node)` pairs. A node stays on the stack while it
/// can still receive children; it is attached to its parent the moment an
/// entry at the same or a lower level arrives. Popping back to the first
/// frame whose level is strictly less than the incoming entry's level
/// restores the correct ancestor across arbitrary level jumps, so a sequence
/// like 1, 3, 2 attaches the level-2 entry under the level-1 entry rather
/// than next to the level-3 one.
///
/// Total over any input: empty sequences, constant levels, non-contiguous
/// levels and sequences that start deep all produce a valid tree. Sibling
/// order equals input order, and every entry appears exactly once.
pub fn build_tree(entries: &[Entry], title: Option<String>) -> TocTree {
    let mut root = TocNode::synthetic_root();
    let mut stack: Vec<(u32, TocNode)> = Vec::new();

    for entry in entries {
        while matches!(stack.last(), Some((level, _)) if *level >= entry.level) {
            attach_top(&mut stack, &mut root);
        }
        stack.push((entry.level, TocNode::from_entry(entry)));
    }

    while !stack.is_empty() {
        attach_top(&mut stack, &mut root);
    }

    TocTree { title, root }
}

/// Pop the top of the stack and attach it to the new top, or to the root
/// when the stack empties
fn attach_top(stack: &mut Vec<(u32, TocNode)>, root: &mut TocNode) {
    if let Some((_, done)) = stack.pop() {
        match stack.last_mut() {
            Some((_, parent)) => parent.children.push(done),
            None => root.children.push(done),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: u32, anchor: &str) -> Entry {
        Entry {
            level,
            anchor: anchor.to_string(),
            html: format!("<span>{}</span>", anchor),
            number: None,
        }
    }

    fn anchors(nodes: &[TocNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.anchor.as_str()).collect()
    }

    #[test]
    fn test_empty_input_yields_childless_root() {
        let tree = build_tree(&[], Some("Empty".to_string()));
        assert!(tree.root.children.is_empty());
        assert_eq!(tree.title.as_deref(), Some("Empty"));
    }

    #[test]
    fn test_constant_levels_become_siblings() {
        let entries = vec![entry(1, "a"), entry(1, "b"), entry(1, "c")];
        let tree = build_tree(&entries, None);
        assert_eq!(anchors(&tree.root.children), vec!["a", "b", "c"]);
        assert!(tree.root.children.iter().all(|n| n.children.is_empty()));
    }

    #[test]
    fn test_strictly_increasing_levels_form_a_chain() {
        let entries = vec![entry(1, "a"), entry(2, "b"), entry(3, "c"), entry(4, "d")];
        let tree = build_tree(&entries, None);
        let mut node = &tree.root;
        for expected in ["a", "b", "c", "d"] {
            assert_eq!(node.children.len(), 1);
            node = &node.children[0];
            assert_eq!(node.anchor, expected);
        }
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_descend_and_ascend() {
        let entries = vec![entry(1, "a"), entry(2, "a1"), entry(1, "b"), entry(2, "b1")];
        let tree = build_tree(&entries, None);
        assert_eq!(anchors(&tree.root.children), vec!["a", "b"]);
        assert_eq!(anchors(&tree.root.children[0].children), vec!["a1"]);
        assert_eq!(anchors(&tree.root.children[1].children), vec!["b1"]);
    }

    #[test]
    fn multi_level_ascent_returns_to_correct_ancestor() {
        // 1, 3, 2: the level-2 entry must land under the level-1 entry, next
        // to the level-3 one, not inside it.
        let entries = vec![entry(1, "a"), entry(3, "deep"), entry(2, "mid")];
        let tree = build_tree(&entries, None);
        assert_eq!(anchors(&tree.root.children), vec!["a"]);
        assert_eq!(anchors(&tree.root.children[0].children), vec!["deep", "mid"]);
        assert!(tree.root.children[0].children[0].children.is_empty());
    }

    #[test]
    fn test_levels_need_not_start_at_one_or_be_contiguous() {
        let entries = vec![entry(2, "a"), entry(5, "a1"), entry(3, "a2"), entry(2, "b")];
        let tree = build_tree(&entries, None);
        assert_eq!(anchors(&tree.root.children), vec!["a", "b"]);
        assert_eq!(anchors(&tree.root.children[0].children), vec!["a1", "a2"]);
    }

    #[test]
    fn test_decreasing_from_the_start() {
        let entries = vec![entry(3, "a"), entry(2, "b"), entry(1, "c")];
        let tree = build_tree(&entries, None);
        assert_eq!(anchors(&tree.root.children), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_no_entry_is_lost_or_duplicated() {
        let entries = vec![
            entry(1, "a"),
            entry(2, "b"),
            entry(4, "c"),
            entry(2, "d"),
            entry(1, "e"),
            entry(3, "f"),
        ];
        let tree = build_tree(&entries, None);
        assert_eq!(tree.root.descendant_count(), entries.len());
    }
}
