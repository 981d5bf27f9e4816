//! Customer-success balancer.
//!
//! # Algorithm
//!
//! 1. Partition representatives into active and away.
//! 2. Validate the round (see [`crate::validation`]).
//! 3. Assign each customer to the weakest active representative whose
//!    score covers it.
//! 4. Rank representatives by served count and pick a strictly unique
//!    leader, or report no winner on a tie for first place.
//!
//! # Example
//!
//! ```
//! use cs_balancing::{balance, Customer, Representative, NO_WINNER};
//!
//! let reps = vec![
//!     Representative::new(1, 60),
//!     Representative::new(2, 20),
//!     Representative::new(3, 95),
//!     Representative::new(4, 75),
//! ];
//! let customers = Customer::from_scores(&[90, 20, 70, 40, 60, 10]);
//!
//! assert_eq!(balance(&reps, &customers, &[2, 4]).unwrap(), 1);
//!
//! let tied = Representative::from_scores(&[1, 2]);
//! assert_eq!(balance(&tied, &customers, &[]).unwrap(), NO_WINNER);
//! ```

mod assign;
mod ranking;

pub use assign::{assign, AssignmentPass};
pub use ranking::{rank, select_winner};

use tracing::debug;

use crate::config::BalancingLimits;
use crate::models::{BalanceReport, BalancingInstance, Customer, Representative};
use crate::validation::{validate_pool, ValidationError};

/// Balances customers across representatives with the default limits.
///
/// Returns the winning representative id, or [`crate::NO_WINNER`] when the
/// two highest served counts are equal.
///
/// # Errors
/// The first violated validation rule.
pub fn balance(
    representatives: &[Representative],
    customers: &[Customer],
    away: &[u32],
) -> Result<u32, ValidationError> {
    Balancer::new().balance(representatives, customers, away)
}

/// Balancer configured with validation limits.
#[derive(Debug, Clone, Default)]
pub struct Balancer {
    limits: BalancingLimits,
}

impl Balancer {
    /// Creates a balancer with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the validation limits.
    pub fn with_limits(mut self, limits: BalancingLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Validation limits in use.
    pub fn limits(&self) -> &BalancingLimits {
        &self.limits
    }

    /// Runs a full evaluation and returns the report.
    ///
    /// The caller's collections are left untouched.
    pub fn evaluate(
        &self,
        representatives: &[Representative],
        customers: &[Customer],
        away: &[u32],
    ) -> Result<BalanceReport, ValidationError> {
        debug!(
            representatives = representatives.len(),
            customers = customers.len(),
            away = away.len(),
            "balancing started"
        );

        let active = validate_pool(representatives, customers, away, &self.limits)?;
        let AssignmentPass {
            mut served,
            assignments,
            unserved,
        } = assign(&active, customers);

        rank(&mut served);
        let winner = select_winner(&served);

        let report = BalanceReport {
            ranking: served,
            assignments,
            unserved,
            winner,
        };
        debug!(
            active = active.len(),
            served = report.total_served(),
            unserved,
            winner = ?winner,
            "balancing finished"
        );
        Ok(report)
    }

    /// Runs an evaluation and returns the winner id or the no-winner sentinel.
    pub fn balance(
        &self,
        representatives: &[Representative],
        customers: &[Customer],
        away: &[u32],
    ) -> Result<u32, ValidationError> {
        self.evaluate(representatives, customers, away)
            .map(|report| report.winner_id())
    }

    /// Evaluates a stored input set.
    pub fn evaluate_instance(
        &self,
        instance: &BalancingInstance,
    ) -> Result<BalanceReport, ValidationError> {
        self.evaluate(
            &instance.representatives,
            &instance.customers,
            &instance.away,
        )
    }
}
