//! Comparison configuration and the ranking cascade.

use std::cmp::Ordering;

use super::entry::{Entry, RankKey};

/// Default tolerance for score and GPA comparisons.
pub const DEFAULT_EPSILON: f64 = 1e-12;

/// Configuration for comparing heap entries.
///
/// Two floating-point keys are considered tied when their absolute
/// difference is `<= epsilon`; only a difference strictly greater than
/// `epsilon` decides the comparison.
///
/// # Examples
///
/// ```
/// use u_priority::heap::CompareConfig;
///
/// let config = CompareConfig::default().with_epsilon(1e-9);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompareConfig {
    /// Tolerance applied to both score and GPA.
    pub epsilon: f64,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl CompareConfig {
    /// Sets the epsilon for floating-point comparison.
    pub fn with_epsilon(mut self, eps: f64) -> Self {
        self.epsilon = eps;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.epsilon.is_finite() {
            return Err(format!("epsilon must be finite, got {}", self.epsilon));
        }
        if self.epsilon < 0.0 {
            return Err(format!("epsilon must be non-negative, got {}", self.epsilon));
        }
        Ok(())
    }

    /// Ranks `a` against `b`.
    ///
    /// `Greater` means `a` ranks above `b`. The cascade is:
    ///
    /// 1. score, higher first (epsilon)
    /// 2. units, higher first
    /// 3. gpa, higher first (epsilon)
    /// 4. name, smaller first
    /// 5. id, smaller first
    ///
    /// `Equal` is returned only when every criterion ties.
    pub fn rank(&self, a: &RankKey, b: &RankKey) -> Ordering {
        if (a.score - b.score).abs() > self.epsilon {
            return if a.score > b.score {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }
        if a.units != b.units {
            return a.units.cmp(&b.units);
        }
        if (a.gpa - b.gpa).abs() > self.epsilon {
            return if a.gpa > b.gpa {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }
        // Strings: the smaller one ranks higher, hence the reversed operands.
        b.name.cmp(&a.name).then_with(|| b.id.cmp(&a.id))
    }

    /// Returns true if `a` ranks strictly above `b`.
    #[inline]
    pub fn is_higher<P>(&self, a: &Entry<P>, b: &Entry<P>) -> bool {
        self.rank(a.key(), b.key()) == Ordering::Greater
    }
}
