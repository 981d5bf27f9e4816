//! Customer-success balancing.
//!
//! Assigns every customer to the active representative with the lowest
//! capability score that still covers the customer's need, then names the
//! representative who served the most customers.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Representative`, `Customer`,
//!   `ServedResult`, `Assignment`, `BalanceReport`, `BalancingInstance`
//! - **`validation`**: Fail-fast input checks (away limit, id/score ranges,
//!   unique scores)
//! - **`balancer`**: Assignment pass, ranking and winner selection
//! - **`config`**: Validation limits, loadable from TOML
//! - **`generate`**: Seeded random instances
//!
//! # Winner rule
//!
//! Only a strictly unique maximum served count produces a winner. When the
//! two highest counts are equal the result is [`NO_WINNER`] (`0`). A lone
//! active representative always wins.

pub mod balancer;
pub mod config;
pub mod generate;
pub mod models;
pub mod validation;

pub use balancer::{balance, Balancer};
pub use config::{BalancingLimits, ConfigError};
pub use models::{
    Assignment, BalanceReport, BalancingInstance, Customer, Representative, ServedResult,
    NO_WINNER,
};
pub use validation::{Bound, ValidationError, ValidationErrorKind};
