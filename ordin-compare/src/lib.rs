//! Clause alignment and diff highlighting for the ordin toolchain
//!
//!     Takes the immutable jurisdiction documents produced by
//!     `ordin-parser` and computes everything a comparison view needs:
//!     which clause titles exist across the set and in what order
//!     (alignment), and which spans of each jurisdiction's text differ
//!     from the base jurisdiction (highlighting).
//!
//!     All functions here are pure: the jurisdiction set is handed over
//!     complete and read-only, and a [`ComparisonIndex`] is built per
//!     comparison run and discarded after rendering.

pub mod align;
pub mod diff;
pub mod index;

pub use align::{rank_by_frequency, rank_by_name};
pub use diff::{diff_spans, highlight, mark_item_number, split_item_number, DiffSpan};
pub use index::{ComparisonIndex, Ranking};
