//! Clause extraction core for the ordin toolchain
//!
//!     Municipal regulation pages are semi-structured markup with no schema
//!     guarantees: clause navigation entries, content blocks keyed by
//!     reference, and paragraph trees nested at arbitrary depth. This crate
//!     turns one fetched page into an ordered, immutable document model;
//!     everything downstream (alignment, diffing, rendering) reads that
//!     model and nothing else.
//!
//! Pipeline
//!
//!     raw markup string
//!       → dom::parse_markup            already-fetched page as a tree
//!       → index::ClauseIndex::build    navigation entries (title, ordinal, ref)
//!       → segment::segment             ordered paragraph texts per clause
//!       → model::JurisdictionDocument  one jurisdiction's clause map
//!
//!     This is a pure lib: no network I/O, no shell assumptions, no
//!     process-wide state. Fetching pages and writing files belong to the
//!     callers.
//!
//! Error posture
//!
//!     Nothing here is fatal. A navigation entry without a target is
//!     skipped, an unparseable ordinal leaves the field absent, a missing
//!     content block yields an empty clause body, and a malformed
//!     paragraph is dropped at paragraph granularity.

pub mod dom;
pub mod extract;
pub mod index;
pub mod label;
pub mod model;
pub mod search;
pub mod segment;

pub use dom::{parse_markup, Fragment};
pub use index::{ClauseIndex, ClauseStub};
pub use model::{Clause, ClauseMap, JurisdictionDocument, JurisdictionEntry, JurisdictionSet};
pub use search::{OrdinanceSummary, SearchParams};
