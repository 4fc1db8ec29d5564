//! Text-diff highlighting
//!
//! Comparison rows show each jurisdiction's paragraph with the spans that
//! differ from the base jurisdiction marked. The diff is asymmetric on
//! purpose: only the compare text is ever rendered, so base-only spans
//! (deletions) are dropped rather than marked.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use similar::{Algorithm, ChangeTag, TextDiff};

/// A contiguous run of the compare text: identical to the base, or
/// inserted/changed relative to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DiffSpan {
    Equal(String),
    Changed(String),
}

impl DiffSpan {
    pub fn text(&self) -> &str {
        match self {
            DiffSpan::Equal(text) | DiffSpan::Changed(text) => text,
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(self, DiffSpan::Changed(_))
    }
}

/// Character-level diff of the compare text against the base.
///
/// Adjacent runs of the same kind are coalesced; concatenating the spans
/// reconstructs the compare text exactly. Base-only ranges emit nothing.
pub fn diff_spans(base: &str, compare: &str) -> Vec<DiffSpan> {
    let diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_chars(base, compare);

    let mut spans: Vec<DiffSpan> = Vec::new();
    for change in diff.iter_all_changes() {
        let changed = match change.tag() {
            ChangeTag::Equal => false,
            ChangeTag::Insert => true,
            // Present only in the base; nothing to render.
            ChangeTag::Delete => continue,
        };
        match spans.last_mut() {
            Some(DiffSpan::Equal(run)) if !changed => run.push_str(change.value()),
            Some(DiffSpan::Changed(run)) if changed => run.push_str(change.value()),
            _ => spans.push(if changed {
                DiffSpan::Changed(change.value().to_string())
            } else {
                DiffSpan::Equal(change.value().to_string())
            }),
        }
    }
    spans
}

/// Render the compare text with changed spans wrapped in the highlight
/// marker.
pub fn highlight(base: &str, compare: &str) -> String {
    let mut out = String::new();
    for span in diff_spans(base, compare) {
        match span {
            DiffSpan::Equal(text) => out.push_str(&text),
            DiffSpan::Changed(text) => {
                out.push_str("<span class=\"diff\">");
                out.push_str(&text);
                out.push_str("</span>");
            }
        }
    }
    out
}

static ITEM_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+\.)").expect("valid pattern"));

/// Split a leading numeric item marker (`1.`, `23.`) off a paragraph
/// text, if present.
pub fn split_item_number(text: &str) -> Option<(&str, &str)> {
    let matched = ITEM_NUMBER.find(text)?;
    Some((matched.as_str(), &text[matched.end()..]))
}

/// Re-wrap a leading numeric item marker in the item-number marker,
/// once, first match only.
pub fn mark_item_number(text: &str) -> String {
    ITEM_NUMBER
        .replace(text, "<span class=\"item-num\">$1</span>")
        .into_owned()
}
