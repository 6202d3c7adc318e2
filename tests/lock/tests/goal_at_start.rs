//! Goal-at-start lock: when the initial state is a goal, every strategy
//! returns the empty solution without enumerating a single action or
//! consulting the heuristic.

use lock_tests::counting::{CountingHeuristic, CountingProblem, InnerHeuristic};
use lock_tests::fixtures;
use waypoint_harness::contract::WorldHeuristic;
use waypoint_harness::worlds::linear_chain::LinearChain;
use waypoint_kernel::problem::{Problem, ZeroHeuristic};
use waypoint_search::policy::SearchPolicy;
use waypoint_search::trace::TerminationReason;
use waypoint_search::{search, Strategy};

#[test]
fn every_strategy_returns_empty_solution_without_expanding() {
    for strategy in Strategy::ALL {
        let problem = CountingProblem::new(LinearChain::new(1));
        let heuristic = InnerHeuristic(CountingHeuristic::new(WorldHeuristic));

        let result = search(
            &problem,
            problem.initial_state(),
            strategy,
            &heuristic,
            &SearchPolicy::default().with_trace(),
        )
        .unwrap();

        assert_eq!(result.solution, Some(Vec::new()), "{strategy}");
        assert_eq!(result.termination, TerminationReason::GoalAtStart);
        let counts = problem.counts();
        assert_eq!(counts.get_actions, 0, "{strategy} enumerated actions");
        assert_eq!(counts.get_successor, 0, "{strategy} built successors");
        assert_eq!(counts.get_cost, 0, "{strategy} read costs");
        assert_eq!(heuristic.0.calls(), 0, "{strategy} called the heuristic");
        assert_eq!(result.stats.expansions, 0);
        assert!(result.trace.unwrap().expansions.is_empty());
    }
}

#[test]
fn goal_at_start_holds_for_any_start_state() {
    // Starting the chain at its final state instead of its initial one.
    let chain = fixtures::linear_chain();
    let problem = CountingProblem::new(chain);
    for strategy in Strategy::ALL {
        let result = search(
            &problem,
            3,
            strategy,
            &ZeroHeuristic,
            &SearchPolicy::default(),
        )
        .unwrap();
        assert_eq!(result.solution, Some(Vec::new()), "{strategy}");
    }
    assert_eq!(problem.counts().get_actions, 0);
}

#[test]
fn goal_at_start_wins_over_depth_zero() {
    let problem = CountingProblem::new(LinearChain::new(1));
    let result = search(
        &problem,
        0,
        Strategy::BreadthFirst,
        &ZeroHeuristic,
        &SearchPolicy::default().with_max_depth(0),
    )
    .unwrap();
    assert_eq!(result.solution, Some(Vec::new()));
}
