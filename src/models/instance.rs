//! Balancing input set.

use serde::{Deserialize, Serialize};

use super::{Customer, Representative};

/// A complete balancing input: representatives, customers and away ids.
///
/// Lets an input set be stored as JSON or TOML and evaluated in one call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancingInstance {
    /// All representatives, active and away.
    pub representatives: Vec<Representative>,
    /// Customers to assign.
    pub customers: Vec<Customer>,
    /// Ids of representatives excluded from this round.
    #[serde(default)]
    pub away: Vec<u32>,
}

impl BalancingInstance {
    /// Creates an instance with no away representatives.
    pub fn new(representatives: Vec<Representative>, customers: Vec<Customer>) -> Self {
        Self {
            representatives,
            customers,
            away: Vec::new(),
        }
    }

    /// Sets the away list.
    pub fn with_away(mut self, away: Vec<u32>) -> Self {
        self.away = away;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_from_json_defaults_away() {
        let json = r#"{
            "representatives": [{"id": 1, "score": 60}, {"id": 2, "score": 20}],
            "customers": [{"id": 1, "score": 50}]
        }"#;
        let instance: BalancingInstance = serde_json::from_str(json).unwrap();
        assert_eq!(instance.representatives.len(), 2);
        assert_eq!(instance.customers[0], Customer::new(1, 50));
        assert!(instance.away.is_empty());
    }

    #[test]
    fn test_with_away() {
        let instance = BalancingInstance::new(Representative::from_scores(&[1, 2]), vec![])
            .with_away(vec![2]);
        assert_eq!(instance.away, vec![2]);
    }
}
