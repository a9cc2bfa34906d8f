//! Priority queue over ranked payloads.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::heap::{BinaryMaxHeap, CompareConfig, Entry, Ranked};

/// Priority queue that scores payloads and keeps them in a [`BinaryMaxHeap`].
///
/// The queue holds no state besides its heap. Payloads are shared through
/// `Arc`, so popping hands back the same allocation that was added.
///
/// # Examples
///
/// ```
/// use u_priority::heap::Ranked;
/// use u_priority::queue::PriorityQueue;
///
/// struct Task { id: &'static str, weight: f64 }
///
/// impl Ranked for Task {
///     fn priority(&self) -> f64 { self.weight }
///     fn units(&self) -> i64 { 0 }
///     fn gpa(&self) -> f64 { 0.0 }
///     fn name(&self) -> &str { self.id }
///     fn id(&self) -> &str { self.id }
/// }
///
/// let mut queue = PriorityQueue::new();
/// queue.add(Task { id: "b", weight: 0.2 });
/// queue.add(Task { id: "a", weight: 0.9 });
///
/// let order: Vec<&str> = queue
///     .to_list_in_priority_order()
///     .iter()
///     .map(|t| t.id)
///     .collect();
/// assert_eq!(order, vec!["a", "b"]);
/// assert_eq!(queue.len(), 2);
/// ```
#[derive(Debug)]
pub struct PriorityQueue<P> {
    heap: BinaryMaxHeap<P>,
}

impl<P> PriorityQueue<P> {
    /// Creates an empty queue with the default comparator.
    pub fn new() -> Self {
        Self {
            heap: BinaryMaxHeap::new(),
        }
    }

    /// Creates an empty queue whose heap uses `config` for every comparison.
    ///
    /// Returns an error if `config` fails [`CompareConfig::validate`].
    pub fn with_config(config: CompareConfig) -> Result<Self, String> {
        Ok(Self {
            heap: BinaryMaxHeap::with_config(config)?,
        })
    }

    /// Returns the number of payloads in the queue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the queue holds no payloads.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the highest-priority payload without removing it.
    pub fn peek(&self) -> Option<&P> {
        self.heap.peek().map(|e| e.payload().as_ref())
    }

    /// Read-only access to the underlying heap.
    pub fn heap(&self) -> &BinaryMaxHeap<P> {
        &self.heap
    }
}

impl<P: Ranked> PriorityQueue<P> {
    /// Scores `payload` and adds it. O(log n).
    pub fn add(&mut self, payload: P) {
        self.add_shared(Arc::new(payload));
    }

    /// Adds a payload that is already shared elsewhere.
    pub fn add_shared(&mut self, payload: Arc<P>) {
        let score = payload.priority();
        trace!(id = payload.id(), score, "queue add");
        self.heap.push(Entry::new(score, payload));
    }

    /// Adds `payload` after checking that its floating-point keys are finite.
    ///
    /// A NaN or infinite priority or GPA is rejected and the queue is left
    /// unchanged.
    pub fn try_add(&mut self, payload: P) -> Result<(), String> {
        let score = payload.priority();
        if !score.is_finite() {
            debug!(id = payload.id(), score, "rejected payload");
            return Err(format!(
                "priority of '{}' must be finite, got {score}",
                payload.id()
            ));
        }
        let gpa = payload.gpa();
        if !gpa.is_finite() {
            debug!(id = payload.id(), gpa, "rejected payload");
            return Err(format!(
                "gpa of '{}' must be finite, got {gpa}",
                payload.id()
            ));
        }
        self.add_shared(Arc::new(payload));
        Ok(())
    }

    /// Removes and returns the highest-priority payload. O(log n).
    pub fn pop(&mut self) -> Option<Arc<P>> {
        let entry = self.heap.pop()?;
        trace!(id = entry.id(), score = entry.score(), "queue pop");
        Some(entry.into_payload())
    }

    /// Lists every payload, highest priority first, without mutating the queue.
    ///
    /// Heapsorts a clone of the heap. O(n log n).
    pub fn to_list_in_priority_order(&self) -> Vec<Arc<P>> {
        let mut snapshot = self.heap.clone();
        let mut out = Vec::with_capacity(snapshot.len());
        while let Some(entry) = snapshot.pop() {
            out.push(entry.into_payload());
        }
        out
    }
}

impl<P> Default for PriorityQueue<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Clone for PriorityQueue<P> {
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
        }
    }
}

impl<P: Ranked> Extend<P> for PriorityQueue<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for payload in iter {
            self.add(payload);
        }
    }
}

impl<P: Ranked> FromIterator<P> for PriorityQueue<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
