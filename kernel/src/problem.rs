//! Search problem contract.

use std::fmt::Debug;
use std::hash::Hash;

/// An ordered action sequence from the initial state to a goal, or `None`
/// when no goal is reachable.
///
/// `Some(vec![])` means the initial state is already a goal.
pub type Solution<A> = Option<Vec<A>>;

/// A state-space search problem.
///
/// The search engine calls only these operations and never inspects state
/// or action payloads beyond the bounds below.
///
/// # Contract
///
/// - `is_goal` is pure and defined for every reachable state.
/// - `get_actions` returns actions in a stable, deterministic order. The
///   order is load-bearing: strategies break ties by insertion order, so a
///   different order can produce a different (equally valid) solution.
///   States without outgoing actions return an empty vector.
/// - `get_successor` is deterministic: the same `(state, action)` always
///   yields an equal state.
/// - `get_cost` is non-negative. Uniform-cost search and A* reject negative
///   or non-finite costs with an error; the other strategies never call it.
pub trait Problem {
    /// Problem-defined state. Used as a key in the explored set.
    type State: Clone + Eq + Hash + Debug;
    /// Problem-defined action. Labels solution steps.
    type Action: Clone + Debug;

    /// The state a search starts from when the caller has no other in mind.
    fn initial_state(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Legal actions from `state`, in deterministic order.
    fn get_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by taking `action` in `state`.
    fn get_successor(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Cost of taking `action` in `state`.
    fn get_cost(&self, state: &Self::State, action: &Self::Action) -> f64;
}

/// Estimate of the remaining cost from a state to the nearest goal.
///
/// Heuristics are pure and carry no state of their own. The engine may call
/// one many times for the same state. Admissibility (never overestimating)
/// is what makes A* optimal; it is the caller's obligation and is not
/// checked.
pub trait Heuristic<P: Problem> {
    /// Estimated remaining cost from `state`.
    fn estimate(&self, problem: &P, state: &P::State) -> f64;
}

impl<P, F> Heuristic<P> for F
where
    P: Problem,
    F: Fn(&P, &P::State) -> f64,
{
    fn estimate(&self, problem: &P, state: &P::State) -> f64 {
        self(problem, state)
    }
}

/// The heuristic that always answers zero. A* with it behaves as
/// uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<P: Problem> Heuristic<P> for ZeroHeuristic {
    fn estimate(&self, _problem: &P, _state: &P::State) -> f64 {
        0.0
    }
}
