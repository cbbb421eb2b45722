//! Fatal error kinds.
//!
//! Everything here aborts a run before the evolutionary loop starts.
//! Per-candidate evaluation problems (an item with no profitability record)
//! are deliberately *not* errors: they score as zero contribution and surface
//! as a `tracing` diagnostic, so a single bad lookup can never abort a search.

use thiserror::Error;

/// Errors raised during configuration or problem construction.
#[derive(Debug, Error)]
pub enum EvolveError {
    /// Configuration rejected by [`crate::ga::GaConfig::validate`].
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The requested menu size cannot be satisfied by the item universe.
    #[error("infeasible menu size: want {want} of {have} items")]
    InfeasibleMenuSize {
        /// Requested number of menu slots.
        want: usize,
        /// Number of items in the catalog.
        have: usize,
    },

    /// The item universe is empty, so no candidate domain exists.
    #[error("catalog contains no items")]
    EmptyCatalog,
}
