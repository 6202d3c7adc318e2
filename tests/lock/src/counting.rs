//! Call-counting wrappers.
//!
//! Wrap any problem or heuristic to observe how often the engine reaches
//! into it. Counters use `Cell` since the engine only holds `&P`.

use std::cell::Cell;

use waypoint_kernel::problem::{Heuristic, Problem};

/// Per-operation call counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub is_goal: u64,
    pub get_actions: u64,
    pub get_successor: u64,
    pub get_cost: u64,
}

/// A `Problem` that forwards to `inner` and counts every call.
#[derive(Debug)]
pub struct CountingProblem<P> {
    pub inner: P,
    is_goal: Cell<u64>,
    get_actions: Cell<u64>,
    get_successor: Cell<u64>,
    get_cost: Cell<u64>,
}

impl<P> CountingProblem<P> {
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            is_goal: Cell::new(0),
            get_actions: Cell::new(0),
            get_successor: Cell::new(0),
            get_cost: Cell::new(0),
        }
    }

    #[must_use]
    pub fn counts(&self) -> CallCounts {
        CallCounts {
            is_goal: self.is_goal.get(),
            get_actions: self.get_actions.get(),
            get_successor: self.get_successor.get(),
            get_cost: self.get_cost.get(),
        }
    }
}

fn bump(counter: &Cell<u64>) {
    counter.set(counter.get() + 1);
}

impl<P: Problem> Problem for CountingProblem<P> {
    type State = P::State;
    type Action = P::Action;

    fn initial_state(&self) -> P::State {
        self.inner.initial_state()
    }

    fn is_goal(&self, state: &P::State) -> bool {
        bump(&self.is_goal);
        self.inner.is_goal(state)
    }

    fn get_actions(&self, state: &P::State) -> Vec<P::Action> {
        bump(&self.get_actions);
        self.inner.get_actions(state)
    }

    fn get_successor(&self, state: &P::State, action: &P::Action) -> P::State {
        bump(&self.get_successor);
        self.inner.get_successor(state, action)
    }

    fn get_cost(&self, state: &P::State, action: &P::Action) -> f64 {
        bump(&self.get_cost);
        self.inner.get_cost(state, action)
    }
}

/// A heuristic that forwards to `inner` and counts calls.
#[derive(Debug)]
pub struct CountingHeuristic<H> {
    pub inner: H,
    calls: Cell<u64>,
}

impl<H> CountingHeuristic<H> {
    #[must_use]
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    #[must_use]
    pub fn calls(&self) -> u64 {
        self.calls.get()
    }
}

impl<H, P> Heuristic<P> for CountingHeuristic<H>
where
    P: Problem,
    H: Heuristic<P>,
{
    fn estimate(&self, problem: &P, state: &P::State) -> f64 {
        bump(&self.calls);
        self.inner.estimate(problem, state)
    }
}

/// Counting heuristic over a wrapped problem: evaluates `inner` against the
/// unwrapped problem so world heuristics keep working.
#[derive(Debug)]
pub struct InnerHeuristic<H>(pub CountingHeuristic<H>);

impl<H, P> Heuristic<CountingProblem<P>> for InnerHeuristic<H>
where
    P: Problem,
    H: Heuristic<P>,
{
    fn estimate(&self, problem: &CountingProblem<P>, state: &P::State) -> f64 {
        self.0.estimate(&problem.inner, state)
    }
}
