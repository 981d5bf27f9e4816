//! Customer-success representative model.
//!
//! A representative serves customers whose score does not exceed the
//! representative's own capability score. Scores must be unique across
//! the whole representative set, away representatives included.

use serde::{Deserialize, Serialize};

/// A customer-success representative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Representative {
    /// Unique identifier, valid in `1..max_representative_id`.
    pub id: u32,
    /// Capability level, valid in `1..max_representative_score`.
    pub score: u32,
}

impl Representative {
    /// Creates a new representative.
    pub fn new(id: u32, score: u32) -> Self {
        Self { id, score }
    }

    /// Builds representatives from a score list, assigning ids `1..=n`
    /// in list order.
    pub fn from_scores(scores: &[u32]) -> Vec<Self> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| Self::new(i as u32 + 1, score))
            .collect()
    }

    /// Whether this representative's capability covers the given need.
    #[inline]
    pub fn covers(&self, customer_score: u32) -> bool {
        customer_score <= self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_scores_assigns_sequential_ids() {
        let reps = Representative::from_scores(&[11, 21, 31]);
        assert_eq!(reps.len(), 3);
        assert_eq!(reps[0], Representative::new(1, 11));
        assert_eq!(reps[2], Representative::new(3, 31));
    }

    #[test]
    fn test_covers_is_inclusive() {
        let r = Representative::new(1, 60);
        assert!(r.covers(60));
        assert!(r.covers(10));
        assert!(!r.covers(61));
    }
}
