//! Paragraph-tree extraction
//!
//! Regulation pages render a clause body as a paragraph element whose
//! sub-items are *nested* paragraph elements, at arbitrary depth and with
//! no schema guarantees. Flattening such a node naively duplicates every
//! sub-item's text inside its ancestors. The extractor walks the tree so
//! that each paragraph contributes exactly one line holding only its own
//! text, in document order.

use crate::dom::Fragment;

/// Tag treated as a paragraph-type element.
const PARAGRAPH_TAG: &str = "p";

/// Whether a node is a paragraph-type element.
pub fn is_paragraph(node: &Fragment) -> bool {
    node.is_tag(PARAGRAPH_TAG)
}

/// Extract the ordered text lines of a node and its nested paragraphs.
///
/// The node's own line comes first (omitted when empty), followed by the
/// lines of each *direct* paragraph-type child in document order. Deeper
/// paragraphs are reached through recursion only, so no text appears under
/// more than one position regardless of nesting depth.
pub fn extract(node: &Fragment) -> Vec<String> {
    let mut lines = Vec::new();
    collect_lines(node, &mut lines);
    lines
}

fn collect_lines(node: &Fragment, lines: &mut Vec<String>) {
    let own = own_line(node);
    if !own.is_empty() {
        lines.push(own);
    }
    for child in node.children() {
        if is_paragraph(&child) {
            collect_lines(&child, lines);
        }
    }
}

/// The text a node carries itself, excluding every direct paragraph-type
/// child.
///
/// Text children contribute their trimmed contents; non-paragraph element
/// children contribute their full descendant text, trimmed. Fragments are
/// joined with single spaces.
pub fn own_line(node: &Fragment) -> String {
    let mut parts: Vec<String> = Vec::new();
    for child in node.children() {
        if let Some(text) = child.text_value() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed.to_string());
            }
        } else if is_paragraph(&child) {
            // Nested paragraphs own their text; see collect_lines.
            continue;
        } else {
            let text = child.text();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed.to_string());
            }
        }
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{append, element, text};

    fn paragraph(own: &str) -> Fragment {
        let node = element("p", vec![]);
        append(&node, &text(own));
        node
    }

    #[test]
    fn leaf_node_yields_its_own_text() {
        let node = paragraph("  only line  ");
        assert_eq!(extract(&node), vec!["only line".to_string()]);
    }

    #[test]
    fn empty_leaf_yields_nothing() {
        let node = element("p", vec![]);
        append(&node, &text("   "));
        assert!(extract(&node).is_empty());
    }

    #[test]
    fn child_paragraph_text_is_not_duplicated_in_parent() {
        let parent = paragraph("parent text");
        let child = paragraph("child text");
        append(&parent, &child);

        assert_eq!(
            extract(&parent),
            vec!["parent text".to_string(), "child text".to_string()]
        );
    }

    #[test]
    fn non_paragraph_elements_merge_into_own_line() {
        let parent = element("p", vec![]);
        append(&parent, &text("lead "));
        let strong = element("strong", vec![]);
        append(&strong, &text("emphasized"));
        append(&parent, &strong);
        append(&parent, &text(" tail"));

        assert_eq!(extract(&parent), vec!["lead emphasized tail".to_string()]);
    }

    #[test]
    fn deep_nesting_flattens_in_document_order() {
        let root = paragraph("1");
        let first = paragraph("1-1");
        let deep = paragraph("1-1-1");
        append(&first, &deep);
        let second = paragraph("1-2");
        append(&root, &first);
        append(&root, &second);

        assert_eq!(
            extract(&root),
            vec![
                "1".to_string(),
                "1-1".to_string(),
                "1-1-1".to_string(),
                "1-2".to_string()
            ]
        );
    }

    #[test]
    fn grandchild_paragraphs_are_not_flattened_into_the_parent_pass() {
        // The grandchild is reached through its parent's recursion, never
        // directly from the root walk.
        let root = element("p", vec![]);
        let child = paragraph("child");
        let grandchild = paragraph("grandchild");
        append(&child, &grandchild);
        append(&root, &child);

        assert_eq!(
            extract(&root),
            vec!["child".to_string(), "grandchild".to_string()]
        );
    }

    #[test]
    fn own_line_skips_paragraph_children_only() {
        let parent = element("p", vec![]);
        append(&parent, &text("a"));
        let span = element("span", vec![]);
        append(&span, &text("b"));
        append(&parent, &span);
        let nested = paragraph("not mine");
        append(&parent, &nested);

        assert_eq!(own_line(&parent), "a b");
    }
}
