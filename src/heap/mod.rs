//! Binary max-heap with a deterministic ranking cascade.
//!
//! Entries are ordered by a frozen 5-tuple: score, units, GPA, name, id.
//! Score and GPA are compared with an epsilon tolerance so that values
//! differing only by floating-point rounding tie and fall through to the
//! next criterion. The final criterion (id) makes the order total.
//!
//! # Design
//!
//! An [`Entry`] is built once and never updated. It snapshots the payload's
//! tie-break attributes at insertion time, so mutating a payload cannot
//! silently break the heap property of entries already stored.

mod binary;
mod compare;
mod entry;
mod types;

pub use binary::BinaryMaxHeap;
pub use compare::{CompareConfig, DEFAULT_EPSILON};
pub use entry::{Entry, RankKey};
pub use types::Ranked;
