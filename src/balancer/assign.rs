//! Lowest-sufficient-capability assignment.
//!
//! # Algorithm
//!
//! 1. Sort active representatives ascending by score (stable).
//! 2. For each customer, binary-search the first representative whose
//!    score is `>=` the customer's score; that representative claims it.
//! 3. Customers above every active score stay unassigned.
//!
//! Equivalent to letting representatives claim covered customers from a
//! shrinking pool, weakest first, without mutating the caller's list.
//!
//! # Complexity
//! O(R log R + C log R) where R=active representatives, C=customers.

use tracing::trace;

use crate::models::{Assignment, Customer, Representative, ServedResult};

/// Result of the assignment pass.
#[derive(Debug, Clone, Default)]
pub struct AssignmentPass {
    /// Served counts in ascending score order.
    pub served: Vec<ServedResult>,
    /// One assignment per customer, in input order.
    pub assignments: Vec<Assignment>,
    /// Customers left unassigned.
    pub unserved: usize,
}

/// Assigns every customer to the weakest active representative covering it.
pub fn assign(active: &[Representative], customers: &[Customer]) -> AssignmentPass {
    let mut ordered = active.to_vec();
    ordered.sort_by_key(|r| r.score);

    let mut served: Vec<ServedResult> = ordered.iter().copied().map(ServedResult::new).collect();
    let mut assignments = Vec::with_capacity(customers.len());
    let mut unserved = 0;

    for customer in customers {
        let slot = ordered.partition_point(|r| !r.covers(customer.score));
        let representative_id = match served.get_mut(slot) {
            Some(result) => {
                result.served += 1;
                Some(result.id())
            }
            None => {
                unserved += 1;
                None
            }
        };
        assignments.push(Assignment {
            customer_id: customer.id,
            representative_id,
        });
    }

    for result in &served {
        trace!(
            representative = result.id(),
            score = result.representative.score,
            served = result.served,
            "representative served count"
        );
    }

    AssignmentPass {
        served,
        assignments,
        unserved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weakest_sufficient_representative_claims() {
        let active = vec![Representative::new(1, 60), Representative::new(3, 95)];
        let customers = Customer::from_scores(&[90, 20, 70, 40, 60, 10]);

        let pass = assign(&active, &customers);

        assert_eq!(pass.served[0].id(), 1);
        assert_eq!(pass.served[0].served, 4);
        assert_eq!(pass.served[1].id(), 3);
        assert_eq!(pass.served[1].served, 2);
        assert_eq!(pass.unserved, 0);

        let ids: Vec<Option<u32>> = pass.assignments.iter().map(|a| a.representative_id).collect();
        assert_eq!(ids, vec![Some(3), Some(1), Some(3), Some(1), Some(1), Some(1)]);
    }

    #[test]
    fn test_served_sorted_ascending_by_score() {
        let active = Representative::from_scores(&[11, 21, 31, 3, 4, 5]);
        let pass = assign(&active, &[]);
        let scores: Vec<u32> = pass.served.iter().map(|r| r.representative.score).collect();
        assert_eq!(scores, vec![3, 4, 5, 11, 21, 31]);
        assert!(pass.served.iter().all(|r| r.served == 0));
    }

    #[test]
    fn test_customers_above_all_scores_unserved() {
        let active = Representative::from_scores(&[1, 2, 3]);
        let customers = Customer::from_scores(&[10, 20, 2]);

        let pass = assign(&active, &customers);

        assert_eq!(pass.unserved, 2);
        assert_eq!(pass.assignments[0].representative_id, None);
        assert_eq!(pass.assignments[2].representative_id, Some(2));
    }

    #[test]
    fn test_equal_score_is_covered() {
        let active = vec![Representative::new(7, 50)];
        let pass = assign(&active, &[Customer::new(1, 50)]);
        assert_eq!(pass.assignments[0].representative_id, Some(7));
    }

    #[test]
    fn test_each_customer_assigned_once() {
        let active = Representative::from_scores(&[5, 15, 25]);
        let customers = Customer::from_scores(&[1, 5, 6, 15, 16, 25, 26, 30]);

        let pass = assign(&active, &customers);

        assert_eq!(pass.assignments.len(), customers.len());
        let served: usize = pass.served.iter().map(|r| r.served).sum();
        assert_eq!(served + pass.unserved, customers.len());
        assert_eq!(pass.unserved, 2);
    }
}
