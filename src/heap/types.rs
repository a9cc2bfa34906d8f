//! Core trait for ranked payloads.

/// A record that can be ordered by the priority heap.
///
/// The heap never mutates a payload. It reads `priority` once when the
/// payload is added and snapshots the tie-break accessors into a
/// [`RankKey`](super::RankKey) at the same moment, so later changes to the
/// payload (through interior mutability, for instance) cannot reorder entries
/// already in the heap.
///
/// Higher `priority` ranks first. Ties within epsilon fall through to
/// `units` (higher first), `gpa` (higher first), `name` (lexicographically
/// smaller first) and finally `id` (lexicographically smaller first).
///
/// # Examples
///
/// ```
/// use u_priority::heap::Ranked;
///
/// struct Applicant {
///     name: String,
///     id: String,
///     gpa: f64,
///     units: i64,
/// }
///
/// impl Ranked for Applicant {
///     fn priority(&self) -> f64 {
///         0.5 * (self.units as f64 / 150.0) + 0.5 * (self.gpa / 4.0)
///     }
///     fn units(&self) -> i64 { self.units }
///     fn gpa(&self) -> f64 { self.gpa }
///     fn name(&self) -> &str { &self.name }
///     fn id(&self) -> &str { &self.id }
/// }
/// ```
///
/// # Contract
///
/// `priority` and `gpa` must be finite. NaN makes the epsilon comparisons
/// meaningless; use [`PriorityQueue::try_add`](crate::queue::PriorityQueue::try_add)
/// when inputs are not trusted.
pub trait Ranked {
    /// Primary ordering key. Higher is preferred.
    fn priority(&self) -> f64;

    /// First tie-breaker. Higher wins.
    fn units(&self) -> i64;

    /// Second tie-breaker. Higher wins.
    fn gpa(&self) -> f64;

    /// Third tie-breaker. Lexicographically smaller wins.
    fn name(&self) -> &str;

    /// Final tie-breaker. Lexicographically smaller wins.
    fn id(&self) -> &str;
}
