//! Priority ordering over records with deterministic tie-breaking.
//!
//! Provides:
//!
//! - **Heap**: an array-backed binary max-heap over immutable entries,
//!   ordered by a five-key cascade (score, units, GPA, name, id) with an
//!   epsilon guard on the floating-point keys.
//! - **Queue**: a facade that scores payloads, snapshots their tie-break
//!   attributes, and offers a non-destructive full-order listing.
//!
//! # Architecture
//!
//! Single-threaded and synchronous. Payloads are shared through `Arc` and
//! never mutated by the heap. Cloning a heap or queue yields an independent
//! snapshot that can be traversed while the original keeps changing.
//!
//! # Examples
//!
//! ```
//! use u_priority::heap::Ranked;
//! use u_priority::queue::PriorityQueue;
//!
//! struct Student { name: String, id: String, gpa: f64, units: i64 }
//!
//! impl Ranked for Student {
//!     fn priority(&self) -> f64 {
//!         0.5 * (self.units as f64 / 150.0) + 0.5 * (self.gpa / 4.0)
//!     }
//!     fn units(&self) -> i64 { self.units }
//!     fn gpa(&self) -> f64 { self.gpa }
//!     fn name(&self) -> &str { &self.name }
//!     fn id(&self) -> &str { &self.id }
//! }
//!
//! let mut queue = PriorityQueue::new();
//! queue.add(Student { name: "Ivy Huynh".into(), id: "R1234567".into(), gpa: 3.7, units: 128 });
//! queue.add(Student { name: "MaxBoth".into(), id: "R103".into(), gpa: 4.0, units: 150 });
//!
//! assert_eq!(queue.peek().map(|s| s.id.as_str()), Some("R103"));
//! ```

pub mod heap;
pub mod queue;
