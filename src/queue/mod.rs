//! Priority queue facade over the binary max-heap.
//!
//! [`PriorityQueue`] computes each payload's score through [`Ranked`],
//! wraps it in an [`Entry`], and delegates ordering to [`BinaryMaxHeap`].
//! Full-order listing is a heapsort of a cloned heap, so the live queue is
//! never touched by it.
//!
//! [`report`] renders queue contents as text; it sits on top of the
//! queue's public operations and adds no ordering logic of its own.
//!
//! [`Ranked`]: crate::heap::Ranked
//! [`Entry`]: crate::heap::Entry
//! [`BinaryMaxHeap`]: crate::heap::BinaryMaxHeap

mod facade;
pub mod report;

pub use facade::PriorityQueue;
