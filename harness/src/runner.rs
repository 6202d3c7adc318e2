//! Harness runner: search a world, then prove the answer with kernel replay.
//!
//! # Pipeline
//!
//! ```text
//! search_traced(world, strategy, WorldHeuristic, policy)
//!   → verify_solution() → trace.digest() → RunReport
//! ```
//!
//! The runner never trusts the engine's own bookkeeping for cost or length:
//! both come from replaying the returned actions through the kernel.

use tracing::debug;
use waypoint_kernel::cost::Cost;
use waypoint_kernel::problem::Problem;
use waypoint_kernel::proof::canon::CanonError;
use waypoint_kernel::proof::hash::ContentHash;
use waypoint_kernel::replay::{verify_solution, ReplayError};
use waypoint_search::policy::SearchPolicy;
use waypoint_search::trace::{SearchStats, TerminationReason};
use waypoint_search::{search_traced, SearchError, Strategy};

use crate::contract::{HarnessWorld, WorldHeuristic};

/// Error during a harness run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The engine rejected the policy or met an invalid cost.
    #[error("search failed: {0}")]
    Search(#[from] SearchError),
    /// The returned solution did not replay to a goal.
    #[error("solution failed replay: {0}")]
    Replay(#[from] ReplayError),
    /// The trace could not be canonicalized for hashing.
    #[error("trace digest failed: {0}")]
    Canon(#[from] CanonError),
}

/// Everything one run established.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport<A> {
    pub world_id: String,
    pub strategy: Strategy,
    pub solution: Option<Vec<A>>,
    /// Replay-verified step count. `None` when unsolved.
    pub steps: Option<usize>,
    /// Replay-verified path cost. `None` when unsolved.
    pub total_cost: Option<Cost>,
    pub stats: SearchStats,
    pub termination: TerminationReason,
    /// Canonical digest of the expansion trace.
    pub trace_digest: ContentHash,
}

impl<A> RunReport<A> {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// Run `strategy` on `world` from its initial state.
///
/// Informed strategies use the world's own heuristic. A trace is always
/// recorded, whatever `policy.record_trace` says.
///
/// # Errors
///
/// Returns [`RunnerError::Search`] for engine errors, [`RunnerError::Replay`]
/// if the solution does not replay to a goal, and [`RunnerError::Canon`] if
/// the trace cannot be hashed.
pub fn run_search<W>(
    world: &W,
    strategy: Strategy,
    policy: &SearchPolicy,
) -> Result<RunReport<W::Action>, RunnerError>
where
    W: HarnessWorld,
    W::Action: PartialEq,
{
    let (result, trace) = search_traced(
        world,
        world.initial_state(),
        strategy,
        &WorldHeuristic,
        policy,
    )?;

    let (steps, total_cost) = match &result.solution {
        Some(actions) => {
            let outcome = verify_solution(world, world.initial_state(), actions)?;
            (Some(outcome.steps), Some(outcome.total_cost))
        }
        None => (None, None),
    };

    let trace_digest = trace.digest()?;

    debug!(
        world_id = world.world_id(),
        %strategy,
        termination = result.termination.as_str(),
        steps = ?steps,
        digest = %trace_digest,
        "run complete"
    );

    Ok(RunReport {
        world_id: world.world_id().to_string(),
        strategy,
        solution: result.solution,
        steps,
        total_cost,
        stats: result.stats,
        termination: result.termination,
        trace_digest,
    })
}
