//! Per-item promotion planning.
//!
//! Assigns each catalog item one of three promotion kinds (none, discount,
//! or buy-one-get-one-free) to maximize promotion-adjusted profit. There is
//! no hard constraint; an aggregate promotion budget is enforced softly, as
//! a linear fitness penalty, so over-budget plans stay in the search space
//! but lose to feasible ones.
//!
//! # Key Types
//!
//! - [`PromoKind`]: the per-item promotion decision
//! - [`PromoGenome`]: promotion-kind vector over the catalog
//! - [`PromotionProblem`]: evaluator with the budget penalty
//! - [`PromotionPlan`] / [`PromotionBreakdown`]: decoded results for
//!   reporting

mod problem;
mod types;

pub use problem::{PromotionProblem, DEFAULT_PENALTY_FACTOR};
pub use types::{PromoGenome, PromoKind, PromotionBreakdown, PromotionPlan};
