//! `LinearChain`: `s0 -> s1 -> ... -> s(n-1)` with a single `"go"` action.
//!
//! Goal: the last state. Every step costs 1. The heuristic is the exact
//! number of remaining steps.

use waypoint_kernel::problem::Problem;

use crate::contract::HarnessWorld;

/// The only action in the chain.
pub const GO: &str = "go";

/// A chain of `len` states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearChain {
    len: u32,
}

impl LinearChain {
    /// A chain with `len` states. A zero-length chain is treated as a single
    /// state that is already the goal.
    #[must_use]
    pub fn new(len: u32) -> Self {
        Self { len: len.max(1) }
    }

    fn last(self) -> u32 {
        self.len - 1
    }
}

impl Problem for LinearChain {
    type State = u32;
    type Action = &'static str;

    fn initial_state(&self) -> u32 {
        0
    }

    fn is_goal(&self, state: &u32) -> bool {
        *state == self.last()
    }

    fn get_actions(&self, state: &u32) -> Vec<&'static str> {
        if *state < self.last() {
            vec![GO]
        } else {
            Vec::new()
        }
    }

    fn get_successor(&self, state: &u32, _action: &&'static str) -> u32 {
        (state + 1).min(self.last())
    }

    fn get_cost(&self, _state: &u32, _action: &&'static str) -> f64 {
        1.0
    }
}

impl HarnessWorld for LinearChain {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "linear_chain"
    }

    fn heuristic(&self, state: &u32) -> f64 {
        f64::from(self.last().saturating_sub(*state))
    }
}
