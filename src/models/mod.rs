//! Balancing domain models.
//!
//! Plain data types describing one balancing round. No entity outlives a
//! single evaluation.
//!
//! | Type | Role |
//! |------|------|
//! | Representative | Customer-success agent with a capability score |
//! | Customer | Account with a required capability score |
//! | ServedResult | Representative plus its served count |
//! | Assignment | Customer → representative link |
//! | BalanceReport | Ranking, assignments and winner of one round |

mod customer;
mod instance;
mod report;
mod representative;

pub use customer::Customer;
pub use instance::BalancingInstance;
pub use report::{Assignment, BalanceReport, ServedResult, NO_WINNER};
pub use representative::Representative;
