//! Document model
//!
//! One comparison run works over a set of jurisdictions, each contributing
//! at most one regulation document. Documents are assembled once from
//! already-fetched markup and are read-only afterwards: alignment and
//! diffing never mutate them. A jurisdiction whose document could not be
//! fetched or matched stays in the set as an explicit absence; it must
//! surface as a "not found" row downstream, never vanish.

use crate::dom::Fragment;
use crate::index::{ClauseIndex, NAV_ID};
use crate::segment::segment;
use serde::Serialize;

/// One numbered regulatory unit: display title, parsed ordinal, content
/// reference, and the ordered paragraph texts of its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clause {
    pub title: String,
    pub ordinal: Option<u32>,
    pub content_ref: String,
    pub paragraphs: Vec<String>,
}

/// Insertion-ordered title → clause map.
///
/// Keys are unique per document and iteration follows document order.
/// Re-inserting an existing title replaces the clause but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClauseMap {
    clauses: Vec<Clause>,
}

impl ClauseMap {
    pub fn insert(&mut self, clause: Clause) {
        match self.clauses.iter_mut().find(|c| c.title == clause.title) {
            Some(existing) => *existing = clause,
            None => self.clauses.push(clause),
        }
    }

    pub fn get(&self, title: &str) -> Option<&Clause> {
        self.clauses.iter().find(|clause| clause.title == title)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.clauses.iter().map(|clause| clause.title.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Clause> {
        self.clauses.iter()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

/// One jurisdiction's regulation document: its name and clause map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JurisdictionDocument {
    pub name: String,
    pub clauses: ClauseMap,
}

impl JurisdictionDocument {
    /// Assemble a document from a fetched regulation page.
    ///
    /// Locates the clause list inside the navigation pane, builds the
    /// clause index, and segments each referenced content block. A page
    /// without a navigation pane yields an empty document; a clause whose
    /// content block is absent keeps its entry with an empty body.
    pub fn from_markup(name: &str, page: &Fragment) -> Self {
        let mut clauses = ClauseMap::default();
        if let Some(list) = clause_list(page) {
            for stub in ClauseIndex::build(&list).entries() {
                let paragraphs = page
                    .find_by_id(&stub.content_ref)
                    .map(|block| segment(&block))
                    .unwrap_or_default();
                clauses.insert(Clause {
                    title: stub.title.clone(),
                    ordinal: stub.ordinal,
                    content_ref: stub.content_ref.clone(),
                    paragraphs,
                });
            }
        }
        JurisdictionDocument {
            name: name.to_string(),
            clauses,
        }
    }
}

/// The clause list of a page's navigation pane.
///
/// Navigation marks the trail to the displayed regulation with "current"
/// items; the clause anchors sit in the list under the deepest one.
/// Panes without a marked trail use the pane itself, so flat navigation
/// still works.
fn clause_list(page: &Fragment) -> Option<Fragment> {
    let nav = page.find_by_id(NAV_ID)?;
    let mut scope = nav;
    while let Some(deeper) = scope.find_by_class("curr") {
        scope = deeper;
    }
    let nested_list = scope
        .children()
        .into_iter()
        .filter(|child| child.is_tag("ul"))
        .next_back();
    nested_list.or(Some(scope))
}

/// One entry of a [`JurisdictionSet`]; `document` is `None` when no
/// matching regulation exists for the jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JurisdictionEntry {
    pub name: String,
    pub document: Option<JurisdictionDocument>,
}

/// The ordered jurisdiction → document mapping handed to alignment.
///
/// Must be complete and immutable before any alignment step begins;
/// partial in-flight results are not a valid input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JurisdictionSet {
    entries: Vec<JurisdictionEntry>,
}

impl JurisdictionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a jurisdiction's document, or its explicit absence.
    /// Re-inserting a name replaces the document but keeps its position.
    pub fn insert(&mut self, name: &str, document: Option<JurisdictionDocument>) {
        match self.entries.iter_mut().find(|entry| entry.name == name) {
            Some(existing) => existing.document = document,
            None => self.entries.push(JurisdictionEntry {
                name: name.to_string(),
                document,
            }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&JurisdictionEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, JurisdictionEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
