//! Balancing limits.
//!
//! Domain bounds applied by validation. Defaults match the production
//! rules; limits can be loaded from TOML to tune them without code changes.
//!
//! ```
//! use cs_balancing::BalancingLimits;
//!
//! let limits = BalancingLimits::from_toml_str(r#"
//!     max_representative_score = 500
//!     enforce_customer_limits = true
//! "#).unwrap();
//!
//! assert_eq!(limits.max_representative_score, 500);
//! assert_eq!(limits.max_representative_id, 1000);
//! assert!(limits.enforce_customer_limits);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Upper bounds used by validation. All bounds are exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BalancingLimits {
    /// Representative ids must be below this value.
    pub max_representative_id: u32,
    /// Representative scores must be below this value.
    pub max_representative_score: u32,
    /// Active representative count must be below this value.
    pub max_active_representatives: usize,
    /// Customer count must be below this value (when enforced).
    pub max_customers: usize,
    /// Customer scores must be below this value (when enforced).
    pub max_customer_score: u32,
    /// Whether customer count and score limits are checked.
    pub enforce_customer_limits: bool,
}

impl Default for BalancingLimits {
    fn default() -> Self {
        Self {
            max_representative_id: 1000,
            max_representative_score: 10_000,
            max_active_representatives: 1000,
            max_customers: 1_000_000,
            max_customer_score: 100_000,
            enforce_customer_limits: false,
        }
    }
}

impl BalancingLimits {
    /// Creates the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads limits from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file is missing, malformed, or has zero limits.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads limits from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses limits from a TOML string. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let limits: Self = toml::from_str(s)?;
        limits.validate()?;
        Ok(limits)
    }

    /// Rejects limits that would make every input invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_representative_id <= 1 {
            return Err(ConfigError::Invalid(
                "max_representative_id must be greater than 1".into(),
            ));
        }
        if self.max_representative_score <= 1 {
            return Err(ConfigError::Invalid(
                "max_representative_score must be greater than 1".into(),
            ));
        }
        if self.max_active_representatives <= 1 {
            return Err(ConfigError::Invalid(
                "max_active_representatives must be greater than 1".into(),
            ));
        }
        if self.enforce_customer_limits && (self.max_customers == 0 || self.max_customer_score == 0)
        {
            return Err(ConfigError::Invalid(
                "customer limits must be positive when enforced".into(),
            ));
        }
        Ok(())
    }

    /// Sets the exclusive representative id bound.
    pub fn with_max_representative_id(mut self, max: u32) -> Self {
        self.max_representative_id = max;
        self
    }

    /// Sets the exclusive representative score bound.
    pub fn with_max_representative_score(mut self, max: u32) -> Self {
        self.max_representative_score = max;
        self
    }

    /// Sets the exclusive active representative count bound.
    pub fn with_max_active_representatives(mut self, max: usize) -> Self {
        self.max_active_representatives = max;
        self
    }

    /// Enables customer checks with the given exclusive bounds.
    pub fn with_customer_limits(mut self, max_customers: usize, max_customer_score: u32) -> Self {
        self.max_customers = max_customers;
        self.max_customer_score = max_customer_score;
        self.enforce_customer_limits = true;
        self
    }
}
