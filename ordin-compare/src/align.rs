//! Cross-jurisdiction clause alignment
//!
//! Different jurisdictions number and order the same clauses differently,
//! so comparison tables are laid out by clause *title*. Two rankings are
//! provided: by how many documents carry a title (the shared clauses
//! first), and alphabetically. Absent documents contribute no titles;
//! they still occupy a rendered row, marked as not found.

use ordin_parser::JurisdictionSet;
use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};

/// Rank clause titles by the number of documents containing them,
/// descending.
///
/// A title counts once per document, not per occurrence. Ties keep
/// first-seen order (jurisdiction insertion order, then clause document
/// order), preserved by the stable sort.
pub fn rank_by_frequency(set: &JurisdictionSet) -> Vec<String> {
    let mut first_seen: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for entry in set.iter() {
        let document = match &entry.document {
            Some(document) => document,
            None => continue,
        };
        // Titles are unique within one document, so this increments each
        // count at most once per document.
        for title in document.clauses.titles() {
            match counts.get_mut(title) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(title.to_string(), 1);
                    first_seen.push(title.to_string());
                }
            }
        }
    }

    let mut ranked = first_seen;
    ranked.sort_by_key(|title| Reverse(counts[title]));
    ranked
}

/// Rank clause titles alphabetically (codepoint order) over the union of
/// all non-absent documents.
pub fn rank_by_name(set: &JurisdictionSet) -> Vec<String> {
    let mut titles: BTreeSet<String> = BTreeSet::new();
    for entry in set.iter() {
        if let Some(document) = &entry.document {
            for title in document.clauses.titles() {
                titles.insert(title.to_string());
            }
        }
    }
    titles.into_iter().collect()
}
