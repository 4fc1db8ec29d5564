//! Comparison index
//!
//! The handoff structure for rendering and export: the ranked clause
//! titles plus the jurisdiction set they were computed from. The ranking
//! is derived at construction from the complete set, so it can never go
//! stale against the documents: rebuilding the index is the only way to
//! change either.

use crate::align::{rank_by_frequency, rank_by_name};
use ordin_parser::{JurisdictionEntry, JurisdictionSet};
use serde::Serialize;

/// Which ranking orders the comparison tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ranking {
    /// Shared clauses first (document count descending).
    #[default]
    Frequency,
    /// Alphabetical (codepoint order).
    Name,
}

/// One comparison run's aligned view over the jurisdiction set.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonIndex {
    pub ordered_titles: Vec<String>,
    pub jurisdictions: JurisdictionSet,
}

impl ComparisonIndex {
    /// Build the index, ranking clause titles over the completed set.
    pub fn build(jurisdictions: JurisdictionSet, ranking: Ranking) -> Self {
        let ordered_titles = match ranking {
            Ranking::Frequency => rank_by_frequency(&jurisdictions),
            Ranking::Name => rank_by_name(&jurisdictions),
        };
        ComparisonIndex {
            ordered_titles,
            jurisdictions,
        }
    }

    /// The base jurisdiction: the first entry in iteration order, even
    /// when its document is absent.
    pub fn base(&self) -> Option<&JurisdictionEntry> {
        self.jurisdictions.iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordin_parser::{Clause, ClauseMap, JurisdictionDocument};

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
    fn build_ranks_over_the_set() {
        let mut set = JurisdictionSet::new();
        set.insert("가군", Some(document("가군", &["정의", "목적"])));
        set.insert("나군", Some(document("나군", &["목적"])));

        let by_frequency = ComparisonIndex::build(set.clone(), Ranking::Frequency);
        assert_eq!(by_frequency.ordered_titles, vec!["목적", "정의"]);

        let by_name = ComparisonIndex::build(set, Ranking::Name);
        assert_eq!(by_name.ordered_titles, vec!["목적", "정의"]);
    }

    #[test]
    fn base_is_first_even_when_absent() {
        let mut set = JurisdictionSet::new();
        set.insert("가군", None);
        set.insert("나군", Some(document("나군", &["목적"])));

        let index = ComparisonIndex::build(set, Ranking::Frequency);
        let base = index.base().expect("base entry");
        assert_eq!(base.name, "가군");
        assert!(base.document.is_none());
    }
}
