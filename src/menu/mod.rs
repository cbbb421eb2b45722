//! Fixed-size menu selection.
//!
//! Searches for the subset of exactly `K` catalog items with the highest
//! combined profitability score. The subset size is a hard constraint:
//! crossover and mutation are free to break it, and a repair operator
//! restores it before any candidate is scored.
//!
//! # Key Types
//!
//! - [`MenuGenome`]: binary inclusion vector over the catalog
//! - [`MenuProblem`]: evaluator, mutation, and cardinality repair
//! - [`decode_selection`] / [`encode_selection`]: genome ↔ item names

mod problem;
mod types;

pub use problem::MenuProblem;
pub use types::{decode_selection, encode_selection, MenuGenome};
