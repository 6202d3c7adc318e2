//! Waypoint Search: generic state-space search over the kernel's
//! [`Problem`](waypoint_kernel::problem::Problem) contract.
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint_kernel  ←  waypoint_search  ←  waypoint_harness
//! (problem contract)  (frontiers, nodes)   (worlds, runner)
//! ```
//!
//! # Strategies
//!
//! All five strategies share one expand-the-frontier loop in [`search()`]
//! and differ only in the frontier discipline and the priority computed for
//! each new entry:
//!
//! | Strategy | Frontier | Priority |
//! |---|---|---|
//! | [`breadth_first_search`] | FIFO | none |
//! | [`depth_first_search`] | LIFO | none |
//! | [`uniform_cost_search`] | min-heap | `g` |
//! | [`greedy_best_first_search`] | min-heap | `h(successor)` |
//! | [`astar_search`] | min-heap | `g + h(successor)` |
//!
//! Heap ties are broken by creation order, earliest first.
//!
//! # Key types
//!
//! - [`NodeArena`](node::NodeArena) — parent-pointer path storage for one call
//! - [`Frontier`](frontier::Frontier) — FIFO, LIFO or priority frontier
//! - [`SearchPolicy`](policy::SearchPolicy) — depth/expansion budgets and trace flag
//! - [`SearchTrace`](trace::SearchTrace) — expansion log with a canonical digest
//! - [`greedy_step`](greedy::greedy_step) — one-step lookahead decision rule

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod greedy;
pub mod node;
pub mod policy;
pub mod search;
pub mod strategy;
pub mod trace;

pub use crate::error::SearchError;
pub use crate::search::{
    astar_search, breadth_first_search, depth_first_search, greedy_best_first_search, search,
    search_traced, uniform_cost_search, SearchResult,
};
pub use crate::strategy::Strategy;
