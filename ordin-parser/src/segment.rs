//! Clause content segmentation
//!
//! A clause's content block holds one paragraph element per logical unit:
//! the clause heading line, then each numbered sub-item. Source markup is
//! irregular: non-breaking spaces, redundant `제N항)` numbering prefixes,
//! and occasional runs where a sub-item's markup opens with the *next*
//! sub-item nested directly inside it. Segmentation tolerates all of this
//! per paragraph: a malformed paragraph is dropped, never the clause.

use crate::dom::Fragment;
use crate::extract::is_paragraph;

/// Segment a clause content block into ordered paragraph-level text units.
///
/// Paragraph-type children are rendered in document order; anything a
/// paragraph fails to yield is silently omitted.
pub fn segment(content_block: &Fragment) -> Vec<String> {
    content_block
        .children()
        .iter()
        .filter(|child| is_paragraph(child))
        .filter_map(paragraph_text)
        .collect()
}

/// The text of one content paragraph, `None` when it yields nothing.
fn paragraph_text(paragraph: &Fragment) -> Option<String> {
    let raw = match leading_nested_pair(paragraph) {
        // Two-level nested head run: only the first nested segment's text
        // belongs to this paragraph; the rest is the next sub-item.
        Some(first_segment) => text_before_first_paragraph(&first_segment),
        None => paragraph.text(),
    };
    let normalized = raw.replace('\u{a0}', " ");
    let stripped = strip_numbering_prefix(normalized.trim()).trim();
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

/// Detect a paragraph whose first element child is a sub-paragraph that
/// itself opens with another sub-paragraph, and return that first
/// sub-paragraph.
fn leading_nested_pair(paragraph: &Fragment) -> Option<Fragment> {
    let first_element = first_element_child(paragraph)?;
    if !is_paragraph(&first_element) {
        return None;
    }
    let inner = first_element_child(&first_element)?;
    if is_paragraph(&inner) {
        Some(first_element)
    } else {
        None
    }
}

fn first_element_child(node: &Fragment) -> Option<Fragment> {
    node.children()
        .into_iter()
        .find(|child| child.tag().is_some())
}

/// The text of a node up to (excluding) its first paragraph-type child.
fn text_before_first_paragraph(node: &Fragment) -> String {
    let mut parts: Vec<String> = Vec::new();
    for child in node.children() {
        if is_paragraph(&child) {
            break;
        }
        let text = match child.text_value() {
            Some(text) => text,
            None => child.text(),
        };
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed.to_string());
        }
    }
    parts.join(" ")
}

/// Drop a leading `제N항) `-style numbering marker.
fn strip_numbering_prefix(text: &str) -> &str {
    if text.starts_with('제') {
        if let Some(idx) = text.find(") ") {
            return &text[idx + 2..];
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{append, element, parse_markup, text};

    #[test]
    fn segments_paragraphs_in_order() {
        let doc = parse_markup(concat!(
            "<div id=\"cl2\">",
            "<p>제2조(정의) 이 조례에서 사용하는 용어의 뜻은 다음과 같다.</p>",
            "<p>1. \"공용차량\"이란 시가 소유한 차량을 말한다.</p>",
            "<p>2. \"이용자\"란 승인을 받은 사람을 말한다.</p>",
            "</div>"
        ));
        let block = doc.find_by_id("cl2").expect("content block");

        let paragraphs = segment(&block);
        assert_eq!(paragraphs.len(), 3);
        // The heading's own numbering marker is stripped like any other.
        assert_eq!(paragraphs[0], "이 조례에서 사용하는 용어의 뜻은 다음과 같다.");
        assert!(paragraphs[1].starts_with("1."));
        assert!(paragraphs[2].starts_with("2."));
    }

    #[test]
    fn normalizes_non_breaking_spaces() {
        let doc = parse_markup("<div id=\"b\"><p>이\u{a0}조례는\u{a0}다음과 같다.</p></div>");
        let block = doc.find_by_id("b").expect("content block");
        assert_eq!(segment(&block), vec!["이 조례는 다음과 같다.".to_string()]);
    }

    #[test]
    fn strips_numbering_prefix() {
        let doc = parse_markup("<div id=\"b\"><p>제1항) 위원회는 10명 이내로 구성한다.</p></div>");
        let block = doc.find_by_id("b").expect("content block");
        assert_eq!(
            segment(&block),
            vec!["위원회는 10명 이내로 구성한다.".to_string()]
        );
    }

    #[test]
    fn numbering_prefix_requires_leading_glyph() {
        let doc = parse_markup("<div id=\"b\"><p>(삭제) 조문 내용</p></div>");
        let block = doc.find_by_id("b").expect("content block");
        assert_eq!(segment(&block), vec!["(삭제) 조문 내용".to_string()]);
    }

    #[test]
    fn skips_non_paragraph_children_and_empty_paragraphs() {
        let doc = parse_markup(concat!(
            "<div id=\"b\"><h3>제목</h3><p>본문</p><p>   </p></div>"
        ));
        let block = doc.find_by_id("b").expect("content block");
        assert_eq!(segment(&block), vec!["본문".to_string()]);
    }

    #[test]
    fn nested_pair_takes_only_the_first_segment() {
        // <p><p>1. first item<p>2. second item</p></p></p>, built
        // programmatically; the HTML5 parser would normalize this away.
        let block = element("div", vec![]);
        let item = element("p", vec![]);
        let first = element("p", vec![]);
        let second = element("p", vec![]);
        append(&second, &text("2. 두 번째 항목"));
        append(&first, &text("1. 첫 번째 항목"));
        append(&first, &second);
        append(&item, &first);
        append(&block, &item);

        // Only the text before the second marker survives; the next
        // sub-item's text does not bleed into this one.
        assert_eq!(segment(&block), vec!["1. 첫 번째 항목".to_string()]);
    }
}
