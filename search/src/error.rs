//! Typed search errors.
//!
//! An unsolvable problem is not an error: it is `Ok` with no solution.
//! `SearchError` is reserved for configuration mistakes caught before the
//! search starts and for problems that break the cost contract mid-search.

use waypoint_kernel::cost::CostError;

/// Typed failure for a search call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// The policy asked for something the engine cannot honour.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
    /// A cost-reading strategy received a negative or non-finite action
    /// cost while generating a successor at `depth`. Continuing would void
    /// the optimality guarantee, so the search stops.
    #[error("invalid action cost while generating depth {depth}: {source}")]
    InvalidCost {
        depth: u32,
        #[source]
        source: CostError,
    },
}
