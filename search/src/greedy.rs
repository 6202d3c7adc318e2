//! One-step greedy lookahead.
//!
//! Not a search: no frontier, no explored set, nothing beyond depth 1. The
//! heuristic is evaluated on every immediate successor and the action with
//! the lowest estimate wins, earliest action first on ties.

use tracing::trace;
use waypoint_kernel::problem::{Heuristic, Problem};

use crate::node::Priority;

/// The locally best action from a state.
#[derive(Debug, Clone, PartialEq)]
pub struct GreedyChoice<A> {
    pub action: A,
    /// Position of `action` in `get_actions` order.
    pub index: usize,
    /// Heuristic estimate of the successor `action` leads to.
    pub estimate: f64,
}

/// Pick the action whose successor the heuristic rates closest to a goal.
///
/// Returns `None` only when `state` is terminal: a goal, or a state with no
/// actions.
pub fn greedy_step<P, H>(
    problem: &P,
    state: &P::State,
    heuristic: &H,
) -> Option<GreedyChoice<P::Action>>
where
    P: Problem,
    H: Heuristic<P>,
{
    if problem.is_goal(state) {
        return None;
    }

    let mut best: Option<(Priority, GreedyChoice<P::Action>)> = None;
    for (index, action) in problem.get_actions(state).into_iter().enumerate() {
        let successor = problem.get_successor(state, &action);
        let estimate = heuristic.estimate(problem, &successor);
        let priority = Priority::new(estimate);
        // Strict comparison keeps the earliest action on ties.
        let improves = match &best {
            None => true,
            Some((current, _)) => priority < *current,
        };
        if improves {
            best = Some((
                priority,
                GreedyChoice {
                    action,
                    index,
                    estimate,
                },
            ));
        }
    }

    let choice = best.map(|(_, choice)| choice);
    trace!(index = ?choice.as_ref().map(|c| c.index), "greedy step");
    choice
}
