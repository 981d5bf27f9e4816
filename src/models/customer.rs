//! Customer model.

use serde::{Deserialize, Serialize};

/// A customer waiting to be assigned.
///
/// `score` is the customer's need; it is compared against representative
/// scores and is not range-checked unless customer limits are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    /// Customer identifier.
    pub id: u32,
    /// Required capability level.
    pub score: u32,
}

impl Customer {
    /// Creates a new customer.
    pub fn new(id: u32, score: u32) -> Self {
        Self { id, score }
    }

    /// Builds customers from a score list, assigning ids `1..=n`.
    pub fn from_scores(scores: &[u32]) -> Vec<Self> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| Self::new(i as u32 + 1, score))
            .collect()
    }

    /// Builds `count` customers that all share the same score.
    pub fn uniform(count: usize, score: u32) -> Vec<Self> {
        (0..count).map(|i| Self::new(i as u32 + 1, score)).collect()
    }
}
