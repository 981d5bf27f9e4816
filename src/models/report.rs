//! Evaluation result model.
//!
//! A report is produced by one balancing evaluation and holds the
//! per-representative served counts, the customer-level assignments and
//! the selected winner.

use serde::{Deserialize, Serialize};

use super::Representative;

/// Value returned in place of a representative id when the two highest
/// served counts are equal.
pub const NO_WINNER: u32 = 0;

/// A representative together with the number of customers it served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServedResult {
    /// The active representative.
    pub representative: Representative,
    /// Customers claimed by this representative.
    pub served: usize,
}

impl ServedResult {
    /// Creates a served result with a zero count.
    pub fn new(representative: Representative) -> Self {
        Self {
            representative,
            served: 0,
        }
    }

    /// Representative id.
    pub fn id(&self) -> u32 {
        self.representative.id
    }
}

/// Customer-to-representative assignment.
///
/// `representative_id` is `None` when no active representative's score
/// covers the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Customer ID.
    pub customer_id: u32,
    /// Serving representative ID.
    pub representative_id: Option<u32>,
}

impl Assignment {
    /// Whether the customer was claimed by a representative.
    pub fn is_served(&self) -> bool {
        self.representative_id.is_some()
    }
}

/// Outcome of a balancing evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Active representatives, sorted by served count (descending).
    /// Equal counts keep ascending-score order.
    pub ranking: Vec<ServedResult>,
    /// One entry per input customer, in input order.
    pub assignments: Vec<Assignment>,
    /// Customers no active representative could cover.
    pub unserved: usize,
    /// Representative with a strictly unique maximum served count.
    pub winner: Option<u32>,
}

impl BalanceReport {
    /// Winner id, or [`NO_WINNER`] on a tie for first place.
    pub fn winner_id(&self) -> u32 {
        self.winner.unwrap_or(NO_WINNER)
    }

    /// Total customers served across all representatives.
    pub fn total_served(&self) -> usize {
        self.ranking.iter().map(|r| r.served).sum()
    }

    /// Served count for a representative (None if it was not active).
    pub fn served_by(&self, representative_id: u32) -> Option<usize> {
        self.ranking
            .iter()
            .find(|r| r.id() == representative_id)
            .map(|r| r.served)
    }

    /// Representative assigned to a customer.
    pub fn representative_for(&self, customer_id: u32) -> Option<u32> {
        self.assignments
            .iter()
            .find(|a| a.customer_id == customer_id)
            .and_then(|a| a.representative_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> BalanceReport {
        BalanceReport {
            ranking: vec![
                ServedResult {
                    representative: Representative::new(1, 60),
                    served: 4,
                },
                ServedResult {
                    representative: Representative::new(3, 95),
                    served: 2,
                },
            ],
            assignments: vec![
                Assignment {
                    customer_id: 1,
                    representative_id: Some(3),
                },
                Assignment {
                    customer_id: 2,
                    representative_id: None,
                },
            ],
            unserved: 1,
            winner: Some(1),
        }
    }

    #[test]
    fn test_report_queries() {
        let report = sample_report();
        assert_eq!(report.winner_id(), 1);
        assert_eq!(report.total_served(), 6);
        assert_eq!(report.served_by(3), Some(2));
        assert_eq!(report.served_by(2), None);
        assert_eq!(report.representative_for(1), Some(3));
        assert_eq!(report.representative_for(2), None);
        assert!(!report.assignments[1].is_served());
    }

    #[test]
    fn test_no_winner_maps_to_sentinel() {
        let report = BalanceReport::default();
        assert_eq!(report.winner_id(), NO_WINNER);
    }

    #[test]
    fn test_report_serde_roundtrip() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let back: BalanceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
