//! Solution replay: re-execute an action sequence through a problem.
//!
//! A replay walks `get_successor` from the initial state, checking at every
//! step that the action is one the current state actually offers and that
//! its cost is valid. [`verify_solution`] additionally requires the final
//! state to be a goal, which is the path-validity property every search
//! result must satisfy.

use crate::cost::{Cost, CostError};
use crate::problem::Problem;

/// Where a replay ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayOutcome<S> {
    /// The state after the last action.
    pub final_state: S,
    /// Sum of `get_cost` over every step.
    pub total_cost: Cost,
    /// Number of actions replayed.
    pub steps: usize,
}

/// A replay could not be completed, or completed on a non-goal state.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReplayError {
    /// The action at `step` is not among `get_actions` of the state reached so far.
    #[error("step {step}: action {action} is not offered by the current state")]
    IllegalAction { step: usize, action: String },
    /// The problem reported an invalid cost for the action at `step`.
    #[error("step {step}: {source}")]
    InvalidCost {
        step: usize,
        #[source]
        source: CostError,
    },
    /// Every action replayed, but the final state is not a goal.
    #[error("replay ended after {steps} steps on a non-goal state")]
    NotAGoal { steps: usize },
}

/// Replay `actions` from `initial_state`.
///
/// # Errors
///
/// Returns [`ReplayError::IllegalAction`] or [`ReplayError::InvalidCost`] at
/// the first offending step.
pub fn replay<P>(
    problem: &P,
    initial_state: P::State,
    actions: &[P::Action],
) -> Result<ReplayOutcome<P::State>, ReplayError>
where
    P: Problem,
    P::Action: PartialEq,
{
    let mut state = initial_state;
    let mut total_cost = Cost::ZERO;

    for (step, action) in actions.iter().enumerate() {
        if !problem.get_actions(&state).contains(action) {
            return Err(ReplayError::IllegalAction {
                step,
                action: format!("{action:?}"),
            });
        }
        let cost = Cost::new(problem.get_cost(&state, action))
            .map_err(|source| ReplayError::InvalidCost { step, source })?;
        total_cost += cost;
        state = problem.get_successor(&state, action);
    }

    Ok(ReplayOutcome {
        final_state: state,
        total_cost,
        steps: actions.len(),
    })
}

/// Replay `actions` and require the final state to be a goal.
///
/// # Errors
///
/// Everything [`replay`] returns, plus [`ReplayError::NotAGoal`].
pub fn verify_solution<P>(
    problem: &P,
    initial_state: P::State,
    actions: &[P::Action],
) -> Result<ReplayOutcome<P::State>, ReplayError>
where
    P: Problem,
    P::Action: PartialEq,
{
    let outcome = replay(problem, initial_state, actions)?;
    if !problem.is_goal(&outcome.final_state) {
        return Err(ReplayError::NotAGoal {
            steps: outcome.steps,
        });
    }
    Ok(outcome)
}
