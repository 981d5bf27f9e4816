//! Input validation for balancing rounds.
//!
//! Checks the representative set before any assignment work. Rules run in
//! a fixed order and the first violated rule ends the evaluation:
//! 1. Away count at most `floor(total / 2)`
//! 2. At least one active representative
//! 3. Fewer active representatives than the configured maximum
//! 4. Every active representative has an in-range id and score
//! 5. No two representatives (away included) share a score
//! 6. Customer count and scores in range (only when enforced)

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::config::BalancingLimits;
use crate::models::{Customer, Representative};

/// Which side of a range a value fell out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bound {
    /// Value hit the reserved lower bound (zero).
    Min,
    /// Value reached the exclusive upper bound.
    Max,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// More than half of the representatives are away.
    TooManyAway,
    /// No representative remains after removing away ones.
    TooFewActive,
    /// Active representative count reached the upper bound.
    TooManyActive,
    /// An active representative's id is out of range.
    InvalidId,
    /// An active representative's score is out of range.
    InvalidScore,
    /// Two representatives share a score.
    DuplicateScore,
    /// Customer count reached the upper bound.
    TooManyCustomers,
    /// A customer's score reached the upper bound.
    InvalidCustomerScore,
}

/// A validation error. Terminal: no partial result accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("too many representatives away: {away} away, at most {max_away} allowed")]
    TooManyAway { away: usize, max_away: usize },

    #[error("minimum active representatives not reached")]
    TooFewActive,

    #[error("maximum active representatives exceeded: {active} active, limit {limit}")]
    TooManyActive { active: usize, limit: usize },

    #[error("{}: {id}", range_message(.bound, "id"))]
    InvalidId { id: u32, bound: Bound },

    #[error("{}: representative {id} has score {score}", range_message(.bound, "score"))]
    InvalidScore { id: u32, score: u32, bound: Bound },

    #[error("duplicate representative levels are not allowed: score {score}")]
    DuplicateScore { score: u32 },

    #[error("maximum customers exceeded: {count} customers, limit {limit}")]
    TooManyCustomers { count: usize, limit: usize },

    #[error("maximum customer score exceeded: customer {id} has score {score}")]
    InvalidCustomerScore { id: u32, score: u32 },
}

fn range_message(bound: &Bound, field: &str) -> String {
    match bound {
        Bound::Min => format!("minimum representative {field} reached"),
        Bound::Max => format!("maximum representative {field} exceeded"),
    }
}

impl ValidationError {
    /// Error category.
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::TooManyAway { .. } => ValidationErrorKind::TooManyAway,
            Self::TooFewActive => ValidationErrorKind::TooFewActive,
            Self::TooManyActive { .. } => ValidationErrorKind::TooManyActive,
            Self::InvalidId { .. } => ValidationErrorKind::InvalidId,
            Self::InvalidScore { .. } => ValidationErrorKind::InvalidScore,
            Self::DuplicateScore { .. } => ValidationErrorKind::DuplicateScore,
            Self::TooManyCustomers { .. } => ValidationErrorKind::TooManyCustomers,
            Self::InvalidCustomerScore { .. } => ValidationErrorKind::InvalidCustomerScore,
        }
    }

    /// Range side for id and score errors.
    pub fn bound(&self) -> Option<Bound> {
        match self {
            Self::InvalidId { bound, .. } | Self::InvalidScore { bound, .. } => Some(*bound),
            _ => None,
        }
    }
}

/// Validates a balancing round and returns the active representatives
/// in input order.
///
/// `away` is counted by length, so repeated or unknown ids still count
/// toward the away limit.
///
/// # Errors
/// The first violated rule, in the order listed in the module docs.
pub fn validate_pool(
    representatives: &[Representative],
    customers: &[Customer],
    away: &[u32],
    limits: &BalancingLimits,
) -> Result<Vec<Representative>, ValidationError> {
    let result = check_pool(representatives, customers, away, limits);
    if let Err(err) = &result {
        debug!(kind = ?err.kind(), error = %err, "balancing input rejected");
    }
    result
}

fn check_pool(
    representatives: &[Representative],
    customers: &[Customer],
    away: &[u32],
    limits: &BalancingLimits,
) -> Result<Vec<Representative>, ValidationError> {
    let away_ids: HashSet<u32> = away.iter().copied().collect();
    let active: Vec<Representative> = representatives
        .iter()
        .filter(|r| !away_ids.contains(&r.id))
        .copied()
        .collect();
    let max_away = representatives.len() / 2;

    if away.len() > max_away {
        return Err(ValidationError::TooManyAway {
            away: away.len(),
            max_away,
        });
    }
    if active.is_empty() {
        return Err(ValidationError::TooFewActive);
    }
    if active.len() >= limits.max_active_representatives {
        return Err(ValidationError::TooManyActive {
            active: active.len(),
            limit: limits.max_active_representatives,
        });
    }

    for rep in &active {
        check_representative(rep, limits)?;
    }

    // Away representatives take part in the uniqueness check.
    let mut scores = HashSet::with_capacity(representatives.len());
    for rep in representatives {
        if !scores.insert(rep.score) {
            return Err(ValidationError::DuplicateScore { score: rep.score });
        }
    }

    if limits.enforce_customer_limits {
        check_customers(customers, limits)?;
    }

    Ok(active)
}

fn check_representative(
    rep: &Representative,
    limits: &BalancingLimits,
) -> Result<(), ValidationError> {
    if rep.id == 0 {
        return Err(ValidationError::InvalidId {
            id: rep.id,
            bound: Bound::Min,
        });
    }
    if rep.id >= limits.max_representative_id {
        return Err(ValidationError::InvalidId {
            id: rep.id,
            bound: Bound::Max,
        });
    }
    if rep.score == 0 {
        return Err(ValidationError::InvalidScore {
            id: rep.id,
            score: rep.score,
            bound: Bound::Min,
        });
    }
    if rep.score >= limits.max_representative_score {
        return Err(ValidationError::InvalidScore {
            id: rep.id,
            score: rep.score,
            bound: Bound::Max,
        });
    }
    Ok(())
}

fn check_customers(customers: &[Customer], limits: &BalancingLimits) -> Result<(), ValidationError> {
    if customers.len() >= limits.max_customers {
        return Err(ValidationError::TooManyCustomers {
            count: customers.len(),
            limit: limits.max_customers,
        });
    }
    match customers
        .iter()
        .find(|c| c.score >= limits.max_customer_score)
    {
        Some(c) => Err(ValidationError::InvalidCustomerScore {
            id: c.id,
            score: c.score,
        }),
        None => Ok(()),
    }
}
