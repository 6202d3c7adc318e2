//! Search entry points and the shared expansion loop.
//!
//! Every strategy runs the same loop:
//!
//! 1. If the initial state is a goal, return the empty solution. No actions
//!    are enumerated and the heuristic is never called.
//! 2. Expand the initial state: one frontier entry per action, and the
//!    initial state becomes the only explored state.
//! 3. Pop by the strategy's rule. Already-explored states are discarded, a
//!    goal ends the search, anything else is expanded.
//! 4. An empty frontier means no solution.
//!
//! Duplicates are detected when an entry is popped, never when it is
//! pushed. Under a depth limit a state counts as a duplicate only if it was
//! already expanded at the same or a shallower depth; a shallower path gets
//! the deeper subtree the cut denied the first expansion.

use std::collections::HashMap;

use tracing::{debug, trace};
use waypoint_kernel::cost::Cost;
use waypoint_kernel::problem::{Heuristic, Problem, Solution, ZeroHeuristic};

use crate::error::SearchError;
use crate::frontier::{Frontier, FrontierEntry};
use crate::node::{FrontierKey, NodeArena, NodeId, Priority};
use crate::policy::SearchPolicy;
use crate::strategy::Strategy;
use crate::trace::{ExpandEvent, SearchStats, SearchTrace, TerminationReason};

/// Result of a search execution.
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    /// The action path, or `None` if no goal was reached.
    pub solution: Solution<A>,
    pub stats: SearchStats,
    pub termination: TerminationReason,
    /// Present only when the policy asked for it.
    pub trace: Option<SearchTrace>,
}

impl<A> SearchResult<A> {
    /// Returns `true` if the search ended on a goal.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }
}

/// Breadth-first search. Ignores costs; returns a fewest-actions solution.
///
/// # Errors
///
/// None in practice: the default policy is always valid and the strategy
/// never reads costs. The `Result` keeps every entry point uniform.
pub fn breadth_first_search<P: Problem>(
    problem: &P,
    initial_state: P::State,
) -> Result<Solution<P::Action>, SearchError> {
    run_default(problem, initial_state, Strategy::BreadthFirst, &ZeroHeuristic)
}

/// Depth-first search. No optimality guarantee; terminates only when the
/// reachable state space is finite (or a policy bounds it, see [`search`]).
///
/// # Errors
///
/// None in practice, as for [`breadth_first_search`].
pub fn depth_first_search<P: Problem>(
    problem: &P,
    initial_state: P::State,
) -> Result<Solution<P::Action>, SearchError> {
    run_default(problem, initial_state, Strategy::DepthFirst, &ZeroHeuristic)
}

/// Uniform-cost search. Optimal for non-negative costs.
///
/// # Errors
///
/// Returns [`SearchError::InvalidCost`] if the problem reports a negative or
/// non-finite action cost.
pub fn uniform_cost_search<P: Problem>(
    problem: &P,
    initial_state: P::State,
) -> Result<Solution<P::Action>, SearchError> {
    run_default(problem, initial_state, Strategy::UniformCost, &ZeroHeuristic)
}

/// Greedy best-first search on the heuristic alone. Ignores costs.
///
/// # Errors
///
/// None in practice, as for [`breadth_first_search`].
pub fn greedy_best_first_search<P, H>(
    problem: &P,
    initial_state: P::State,
    heuristic: &H,
) -> Result<Solution<P::Action>, SearchError>
where
    P: Problem,
    H: Heuristic<P>,
{
    run_default(problem, initial_state, Strategy::GreedyBestFirst, heuristic)
}

/// A* search on `f = g + h`. Optimal for non-negative costs and an
/// admissible heuristic.
///
/// # Errors
///
/// Returns [`SearchError::InvalidCost`] if the problem reports a negative or
/// non-finite action cost.
pub fn astar_search<P, H>(
    problem: &P,
    initial_state: P::State,
    heuristic: &H,
) -> Result<Solution<P::Action>, SearchError>
where
    P: Problem,
    H: Heuristic<P>,
{
    run_default(problem, initial_state, Strategy::AStar, heuristic)
}

fn run_default<P, H>(
    problem: &P,
    initial_state: P::State,
    strategy: Strategy,
    heuristic: &H,
) -> Result<Solution<P::Action>, SearchError>
where
    P: Problem,
    H: Heuristic<P>,
{
    search(
        problem,
        initial_state,
        strategy,
        heuristic,
        &SearchPolicy::default(),
    )
    .map(|result| result.solution)
}

/// Run `strategy` from `initial_state` under `policy`.
///
/// The heuristic is consulted only by informed strategies; pass
/// [`ZeroHeuristic`] for the others.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] before any problem call if the
/// policy fails validation, and [`SearchError::InvalidCost`] if a
/// cost-reading strategy meets a negative or non-finite cost.
pub fn search<P, H>(
    problem: &P,
    initial_state: P::State,
    strategy: Strategy,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<SearchResult<P::Action>, SearchError>
where
    P: Problem,
    H: Heuristic<P>,
{
    let (mut result, expansions) = execute(problem, initial_state, strategy, heuristic, policy)?;
    if policy.record_trace {
        result.trace = Some(trace_of(strategy, &result, expansions));
    }
    Ok(result)
}

/// Run `strategy` like [`search`], always recording the expansion trace.
///
/// The trace is returned alongside the result rather than inside it, so
/// `SearchResult::trace` is `None` here whatever `policy.record_trace` says.
///
/// # Errors
///
/// As for [`search`].
pub fn search_traced<P, H>(
    problem: &P,
    initial_state: P::State,
    strategy: Strategy,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<(SearchResult<P::Action>, SearchTrace), SearchError>
where
    P: Problem,
    H: Heuristic<P>,
{
    let recording = policy.clone().with_trace();
    let (result, expansions) = execute(problem, initial_state, strategy, heuristic, &recording)?;
    let trace = trace_of(strategy, &result, expansions);
    Ok((result, trace))
}

fn trace_of<A>(
    strategy: Strategy,
    result: &SearchResult<A>,
    expansions: Vec<ExpandEvent>,
) -> SearchTrace {
    SearchTrace {
        strategy,
        expansions,
        stats: result.stats,
        termination: result.termination,
    }
}

/// The shared loop. Returns the result without a trace, plus the expansion
/// events (empty unless `policy.record_trace`).
fn execute<P, H>(
    problem: &P,
    initial_state: P::State,
    strategy: Strategy,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<(SearchResult<P::Action>, Vec<ExpandEvent>), SearchError>
where
    P: Problem,
    H: Heuristic<P>,
{
    policy.validate()?;
    debug!(%strategy, max_depth = ?policy.max_depth, max_expansions = ?policy.max_expansions, "search started");

    if problem.is_goal(&initial_state) {
        let stats = SearchStats::default();
        let result = finish(
            strategy,
            Some(Vec::new()),
            stats,
            TerminationReason::GoalAtStart,
        );
        return Ok((result, Vec::new()));
    }

    let mut run = Run::new(problem, heuristic, strategy, policy, initial_state);
    let root = run.root;
    run.expand(root, Priority::ZERO)?;

    let mut goal: Option<NodeId> = None;
    let mut budget_exceeded = false;

    while let Some(entry) = run.frontier.pop() {
        let node = run.arena.get(entry.node);
        if run.is_settled(&node.state, node.depth) {
            run.stats.duplicates_discarded += 1;
            continue;
        }
        if problem.is_goal(&node.state) {
            goal = Some(entry.node);
            break;
        }
        if policy
            .max_expansions
            .is_some_and(|max| run.stats.expansions >= max)
        {
            budget_exceeded = true;
            break;
        }
        run.expand(entry.node, entry.key.priority)?;
    }

    let termination = match goal {
        Some(id) => TerminationReason::GoalReached {
            node_id: id.as_u64(),
            depth: run.arena.get(id).depth,
        },
        None if budget_exceeded => TerminationReason::ExpansionBudgetExceeded,
        None if run.depth_limited => TerminationReason::DepthLimited,
        None => TerminationReason::FrontierExhausted,
    };
    let solution = goal.map(|id| run.arena.reconstruct_actions(id));

    let mut stats = run.stats;
    stats.frontier_high_water = run.frontier.high_water();
    Ok((finish(strategy, solution, stats, termination), run.events))
}

fn finish<A>(
    strategy: Strategy,
    solution: Solution<A>,
    stats: SearchStats,
    termination: TerminationReason,
) -> SearchResult<A> {
    debug!(
        %strategy,
        termination = termination.as_str(),
        expansions = stats.expansions,
        generated = stats.generated,
        duplicates_discarded = stats.duplicates_discarded,
        frontier_high_water = stats.frontier_high_water,
        solution_len = ?solution.as_ref().map(Vec::len),
        "search finished"
    );
    SearchResult {
        solution,
        stats,
        termination,
        trace: None,
    }
}

/// Mutable state of one search call. Dropped when the call returns.
struct Run<'a, P: Problem, H> {
    problem: &'a P,
    heuristic: &'a H,
    strategy: Strategy,
    policy: &'a SearchPolicy,
    arena: NodeArena<P::State, P::Action>,
    root: NodeId,
    frontier: Frontier,
    /// Explored states with the shallowest depth each was expanded at.
    explored: HashMap<P::State, u32>,
    next_creation_order: u64,
    stats: SearchStats,
    /// Set once any expansion had successors cut by `max_depth`.
    depth_limited: bool,
    events: Vec<ExpandEvent>,
}

impl<'a, P, H> Run<'a, P, H>
where
    P: Problem,
    H: Heuristic<P>,
{
    fn new(
        problem: &'a P,
        heuristic: &'a H,
        strategy: Strategy,
        policy: &'a SearchPolicy,
        initial_state: P::State,
    ) -> Self {
        let (arena, root) = NodeArena::with_root(initial_state);
        Self {
            problem,
            heuristic,
            strategy,
            policy,
            arena,
            root,
            frontier: Frontier::for_strategy(strategy),
            explored: HashMap::new(),
            next_creation_order: 0,
            stats: SearchStats::default(),
            depth_limited: false,
            events: Vec::new(),
        }
    }

    /// Whether popping `state` at `depth` should be discarded as a duplicate.
    fn is_settled(&self, state: &P::State, depth: u32) -> bool {
        match self.explored.get(state) {
            None => false,
            Some(_) if self.policy.max_depth.is_none() => true,
            Some(&expanded_at) => expanded_at <= depth,
        }
    }

    /// Mark `id` explored and push one entry per action, in problem order.
    fn expand(&mut self, id: NodeId, popped_with: Priority) -> Result<(), SearchError> {
        let node = self.arena.get(id);
        let state = node.state.clone();
        let parent_id = node.parent.map(NodeId::as_u64);
        let depth = node.depth;
        let g_cost = node.g_cost;
        let child_depth = depth.saturating_add(1);

        let actions = self.problem.get_actions(&state);
        let mut children = 0u64;

        if self.policy.max_depth.is_some_and(|max| child_depth > max) {
            if !actions.is_empty() {
                self.depth_limited = true;
            }
        } else {
            for action in actions {
                let successor = self.problem.get_successor(&state, &action);
                let (child_g, priority) =
                    self.payload(&state, &action, &successor, g_cost, child_depth)?;
                let child = self
                    .arena
                    .push_child(id, successor, action, child_depth, child_g);
                self.frontier.push(FrontierEntry {
                    node: child,
                    key: FrontierKey {
                        priority,
                        creation_order: self.next_creation_order,
                    },
                });
                self.next_creation_order += 1;
                children += 1;
            }
        }

        self.explored
            .entry(state)
            .and_modify(|expanded_at| *expanded_at = (*expanded_at).min(depth))
            .or_insert(depth);
        let expansion_order = self.stats.expansions;
        self.stats.expansions += 1;
        self.stats.generated += children;

        trace!(
            expansion_order,
            node_id = id.as_u64(),
            depth,
            priority = popped_with.get(),
            children,
            frontier_len = self.frontier.len(),
            "expanded"
        );

        if self.policy.record_trace {
            self.events.push(ExpandEvent {
                expansion_order,
                node_id: id.as_u64(),
                parent_id,
                depth,
                g_cost: g_cost.get(),
                priority: popped_with.get(),
                children,
            });
        }
        Ok(())
    }

    /// Cumulative cost and frontier priority of a new entry.
    fn payload(
        &self,
        state: &P::State,
        action: &P::Action,
        successor: &P::State,
        parent_g: Cost,
        child_depth: u32,
    ) -> Result<(Cost, Priority), SearchError> {
        match self.strategy {
            Strategy::BreadthFirst | Strategy::DepthFirst => Ok((parent_g, Priority::ZERO)),
            Strategy::GreedyBestFirst => Ok((
                parent_g,
                Priority::new(self.heuristic.estimate(self.problem, successor)),
            )),
            Strategy::UniformCost => {
                let g = parent_g + self.step_cost(state, action, child_depth)?;
                Ok((g, Priority::from(g)))
            }
            Strategy::AStar => {
                let g = parent_g + self.step_cost(state, action, child_depth)?;
                let h = self.heuristic.estimate(self.problem, successor);
                Ok((g, Priority::new(g.get() + h)))
            }
        }
    }

    fn step_cost(
        &self,
        state: &P::State,
        action: &P::Action,
        child_depth: u32,
    ) -> Result<Cost, SearchError> {
        Cost::new(self.problem.get_cost(state, action)).map_err(|source| {
            SearchError::InvalidCost {
                depth: child_depth,
                source,
            }
        })
    }
}
