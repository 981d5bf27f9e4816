//! Random instance generation.
//!
//! Produces valid balancing rounds for property checks and benchmarks:
//! representative scores are unique, ids are `1..=n` and the away list
//! never exceeds `floor(n / 2)`.

use rand::seq::index;
use rand::Rng;

use crate::models::{BalancingInstance, Customer, Representative};

/// Generator of random balancing instances.
///
/// # Example
///
/// ```
/// use cs_balancing::generate::InstanceGenerator;
/// use cs_balancing::Balancer;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let instance = InstanceGenerator::new(10, 100).generate(&mut rng);
///
/// assert_eq!(instance.representatives.len(), 10);
/// assert!(Balancer::new().evaluate_instance(&instance).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct InstanceGenerator {
    representatives: usize,
    customers: usize,
    max_representative_score: u32,
    max_customer_score: u32,
    with_away: bool,
}

impl InstanceGenerator {
    /// Creates a generator for the given pool sizes.
    ///
    /// Representative count is capped at 998 so ids stay valid.
    pub fn new(representatives: usize, customers: usize) -> Self {
        Self {
            representatives: representatives.min(998),
            customers,
            max_representative_score: 10_000,
            max_customer_score: 10_000,
            with_away: true,
        }
    }

    /// Sets the exclusive representative score bound and the inclusive
    /// customer score bound.
    pub fn with_score_range(mut self, max_representative_score: u32, max_customer_score: u32) -> Self {
        self.max_representative_score = max_representative_score.max(2);
        self.max_customer_score = max_customer_score.max(1);
        self
    }

    /// Disables away representatives.
    pub fn without_away(mut self) -> Self {
        self.with_away = false;
        self
    }

    /// Generates an instance.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> BalancingInstance {
        let score_space = (self.max_representative_score - 1) as usize;
        let count = self.representatives.min(score_space);

        let representatives: Vec<Representative> = index::sample(rng, score_space, count)
            .into_iter()
            .enumerate()
            .map(|(i, s)| Representative::new(i as u32 + 1, s as u32 + 1))
            .collect();

        let customers = (0..self.customers)
            .map(|i| Customer::new(i as u32 + 1, rng.random_range(1..=self.max_customer_score)))
            .collect();

        let away = if self.with_away && count > 1 {
            let away_count = rng.random_range(0..=count / 2);
            index::sample(rng, count, away_count)
                .into_iter()
                .map(|i| i as u32 + 1)
                .collect()
        } else {
            Vec::new()
        };

        BalancingInstance {
            representatives,
            customers,
            away,
        }
    }
}
