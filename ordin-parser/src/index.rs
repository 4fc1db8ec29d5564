//! Clause index construction
//!
//! The navigation pane of a regulation page lists one anchor per clause.
//! [`ClauseIndex::build`] scans those anchors in document order and keeps,
//! for each usable entry, the display title, the parsed ordinal, and the
//! reference to the clause's content block. Both lookup views (by title
//! and by ordinal) derive from the same document-ordered list so that
//! downstream ranking stays deterministic.

use crate::dom::Fragment;
use crate::label::{clause_ordinal, clause_title, strip_ref_separator};
use serde::Serialize;

/// Well-known id of the navigation pane in fetched regulation pages.
pub const NAV_ID: &str = "cms-lnb";

/// One navigation entry: title, ordinal, and content-block reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClauseStub {
    pub title: String,
    pub ordinal: Option<u32>,
    pub content_ref: String,
}

/// Document-ordered clause entries of one regulation page.
#[derive(Debug, Clone, Default)]
pub struct ClauseIndex {
    entries: Vec<ClauseStub>,
}

impl ClauseIndex {
    /// Scan a navigation fragment for clause entries.
    ///
    /// Anchors without a target reference are skipped; entries with an
    /// unparseable ordinal are kept (they stay reachable by title).
    pub fn build(nav: &Fragment) -> Self {
        let mut entries = Vec::new();
        for anchor in nav.find_all("a") {
            let target = match anchor.attribute("href") {
                Some(href) if !href.is_empty() => href,
                _ => continue,
            };
            let label = anchor.text();
            let title = clause_title(&label);
            if title.is_empty() {
                continue;
            }
            entries.push(ClauseStub {
                title,
                ordinal: clause_ordinal(&label),
                content_ref: strip_ref_separator(&target).to_string(),
            });
        }
        ClauseIndex { entries }
    }

    /// The entries in document order.
    pub fn entries(&self) -> &[ClauseStub] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The content reference for a clause title.
    pub fn ref_by_title(&self, title: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|stub| stub.title == title)
            .map(|stub| stub.content_ref.as_str())
    }

    /// The content reference for a clause ordinal. Entries without a
    /// parseable ordinal never match here.
    pub fn ref_by_ordinal(&self, ordinal: u32) -> Option<&str> {
        self.entries
            .iter()
            .find(|stub| stub.ordinal == Some(ordinal))
            .map(|stub| stub.content_ref.as_str())
    }

    /// Title → content-ref pairs in document order.
    pub fn title_view(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|stub| (stub.title.as_str(), stub.content_ref.as_str()))
    }

    /// Ordinal → content-ref pairs in document order, skipping entries
    /// without an ordinal.
    pub fn ordinal_view(&self) -> impl Iterator<Item = (u32, &str)> {
        self.entries
            .iter()
            .filter_map(|stub| Some((stub.ordinal?, stub.content_ref.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_markup;

    const NAV: &str = concat!(
        "<nav id=\"cms-lnb\"><ul><li class=\"curr\"><ul><li class=\"curr\"><ul>",
        "<li><a href=\"#cl1\">제1조 (목적) </a></li>",
        "<li><a href=\"#cl2\">제2조 (정의) </a></li>",
        "<li><a>제3조 (무시) </a></li>",
        "<li><a href=\"#annex\">부칙 (경과조치) </a></li>",
        "</ul></li></ul></li></ul></nav>",
    );

    fn build_index() -> ClauseIndex {
        let doc = parse_markup(NAV);
        let nav = doc.find_by_id(NAV_ID).expect("nav fragment");
        ClauseIndex::build(&nav)
    }

    #[test]
    fn builds_entries_in_document_order() {
        let index = build_index();
        let titles: Vec<&str> = index.entries().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["목적", "정의", "경과조치"]);
    }

    #[test]
    fn skips_anchors_without_target() {
        let index = build_index();
        assert!(index.ref_by_title("무시").is_none());
    }

    #[test]
    fn keeps_entries_without_ordinal() {
        let index = build_index();
        assert_eq!(index.ref_by_title("경과조치"), Some("annex"));
        // ...but they never answer ordinal lookups.
        let ordinals: Vec<u32> = index.ordinal_view().map(|(n, _)| n).collect();
        assert_eq!(ordinals, vec![1, 2]);
    }

    #[test]
    fn both_views_share_document_order() {
        let index = build_index();
        let by_title: Vec<&str> = index.title_view().map(|(_, r)| r).collect();
        assert_eq!(by_title, vec!["cl1", "cl2", "annex"]);
        assert_eq!(index.ref_by_ordinal(2), Some("cl2"));
        assert_eq!(index.ref_by_ordinal(3), None);
    }
}
