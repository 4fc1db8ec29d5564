//! Title-presence matrix
//!
//! The tabular handoff for spreadsheet export collaborators: one header
//! row of ranked clause titles and one row per jurisdiction marking which
//! titles its document carries. Writing an actual spreadsheet file is the
//! consumer's job; this structure fixes the field names and ordering the
//! export must preserve.

use ordin_compare::ComparisonIndex;
use serde::Serialize;

/// Header label of the jurisdiction column.
pub const JURISDICTION_HEADER: &str = "시군구";

/// Presence of each ranked clause title in one jurisdiction's document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRow {
    pub name: String,
    /// `false` when the jurisdiction has no document at all.
    pub found: bool,
    /// One mark per ranked title, in header order.
    pub marks: Vec<bool>,
}

/// The jurisdiction × clause-title presence table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleMatrix {
    pub headers: Vec<String>,
    pub rows: Vec<MatrixRow>,
}

/// Build the presence matrix over a comparison index, preserving both the
/// title ranking and the jurisdiction order.
pub fn title_matrix(index: &ComparisonIndex) -> TitleMatrix {
    let mut headers = Vec::with_capacity(index.ordered_titles.len() + 1);
    headers.push(JURISDICTION_HEADER.to_string());
    headers.extend(index.ordered_titles.iter().cloned());

    let rows = index
        .jurisdictions
        .iter()
        .map(|entry| {
            let marks = index
                .ordered_titles
                .iter()
                .map(|title| {
                    entry
                        .document
                        .as_ref()
                        .map(|document| document.clauses.get(title).is_some())
                        .unwrap_or(false)
                })
                .collect();
            MatrixRow {
                name: entry.name.clone(),
                found: entry.document.is_some(),
                marks,
            }
        })
        .collect();

    TitleMatrix { headers, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordin_compare::Ranking;
    use ordin_parser::{Clause, ClauseMap, JurisdictionDocument, JurisdictionSet};

    fn document(name: &str, titles: &[&str]) -> JurisdictionDocument {
        let mut clauses = ClauseMap::default();
        for title in titles {
            clauses.insert(Clause {
                title: title.to_string(),
                ordinal: None,
                content_ref: String::new(),
                paragraphs: Vec::new(),
            });
        }
        JurisdictionDocument {
            name: name.to_string(),
            clauses,
        }
    }

    #[test]
    fn marks_follow_header_order() {
        let mut set = JurisdictionSet::new();
        set.insert("가군", Some(document("가군", &["목적", "정의"])));
        set.insert("나군", Some(document("나군", &["목적"])));
        set.insert("다군", None);

        let matrix = title_matrix(&ComparisonIndex::build(set, Ranking::Frequency));
        assert_eq!(matrix.headers, vec!["시군구", "목적", "정의"]);

        assert_eq!(matrix.rows[0].marks, vec![true, true]);
        assert_eq!(matrix.rows[1].marks, vec![true, false]);

        // An absent document keeps its row, marked not found.
        assert!(!matrix.rows[2].found);
        assert_eq!(matrix.rows[2].marks, vec![false, false]);
    }
}
