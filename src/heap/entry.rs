//! Immutable heap entries.

use std::sync::Arc;

use super::types::Ranked;

/// The frozen 5-tuple an entry is ordered by.
///
/// Strings are reference counted so that cloning a key (and therefore an
/// entry, and therefore a whole heap) never copies string data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankKey {
    /// Primary key. Higher is preferred.
    pub score: f64,
    /// Higher wins.
    pub units: i64,
    /// Higher wins.
    pub gpa: f64,
    /// Smaller wins.
    pub name: Arc<str>,
    /// Smaller wins.
    pub id: Arc<str>,
}

impl RankKey {
    pub fn new(
        score: f64,
        units: i64,
        gpa: f64,
        name: impl Into<Arc<str>>,
        id: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            score,
            units,
            gpa,
            name: name.into(),
            id: id.into(),
        }
    }

    /// Snapshots the tie-break accessors of `payload` alongside `score`.
    pub fn snapshot<P: Ranked + ?Sized>(score: f64, payload: &P) -> Self {
        Self::new(
            score,
            payload.units(),
            payload.gpa(),
            payload.name(),
            payload.id(),
        )
    }
}

/// A heap node: a payload plus the key it was ranked by when inserted.
///
/// Entries have no setters. Once built, the key never changes, regardless
/// of what happens to the payload afterwards.
#[derive(Debug)]
pub struct Entry<P> {
    key: RankKey,
    payload: Arc<P>,
}

impl<P: Ranked> Entry<P> {
    /// Builds an entry for `payload` with a precomputed `score`.
    pub fn new(score: f64, payload: Arc<P>) -> Self {
        let key = RankKey::snapshot(score, payload.as_ref());
        Self { key, payload }
    }
}

impl<P> Entry<P> {
    /// Builds an entry from an explicit key.
    ///
    /// The payload does not need to implement [`Ranked`]; the key alone
    /// determines the position of the entry in the heap.
    pub fn with_key(key: RankKey, payload: Arc<P>) -> Self {
        Self { key, payload }
    }

    /// Returns the frozen ranking key.
    pub fn key(&self) -> &RankKey {
        &self.key
    }

    /// Returns the score captured at insertion.
    pub fn score(&self) -> f64 {
        self.key.score
    }

    /// Returns the snapshotted units.
    pub fn units(&self) -> i64 {
        self.key.units
    }

    /// Returns the snapshotted GPA.
    pub fn gpa(&self) -> f64 {
        self.key.gpa
    }

    /// Returns the snapshotted name.
    pub fn name(&self) -> &str {
        &self.key.name
    }

    /// Returns the snapshotted id.
    pub fn id(&self) -> &str {
        &self.key.id
    }

    /// Returns the shared payload.
    pub fn payload(&self) -> &Arc<P> {
        &self.payload
    }

    /// Consumes the entry, returning the shared payload.
    pub fn into_payload(self) -> Arc<P> {
        self.payload
    }
}

impl<P> Clone for Entry<P> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            payload: Arc::clone(&self.payload),
        }
    }
}
