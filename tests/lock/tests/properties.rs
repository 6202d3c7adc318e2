//! Property locks over random small graphs, checked against exhaustive
//! oracles in `lock_tests::random_graph`.

#![allow(clippy::cast_precision_loss)]

use lock_tests::random_graph::RandomGraph;
use proptest::prelude::*;
use proptest::strategy::Strategy as _;
use waypoint_kernel::problem::ZeroHeuristic;
use waypoint_search::greedy::greedy_step;
use waypoint_search::policy::SearchPolicy;
use waypoint_search::trace::TerminationReason;
use waypoint_search::{search, Strategy};

/// 2..=7 nodes, up to 4 outgoing edges each, integer costs 0..=9.
fn arb_graph() -> impl proptest::strategy::Strategy<Value = RandomGraph> {
    (2usize..=7)
        .prop_flat_map(|n| {
            let edges = prop::collection::vec(
                prop::collection::vec((0..n, 0u32..=9), 0..=4),
                n,
            );
            (edges, 0..n)
        })
        .prop_map(|(edges, goal)| RandomGraph { edges, goal })
}

fn run(graph: &RandomGraph, strategy: Strategy, exact_h: bool) -> Option<Vec<usize>> {
    let table = graph.cost_to_goal();
    // Dead ends cannot reach the goal, so any finite estimate is admissible.
    let exact = |_: &RandomGraph, s: &usize| table[*s].map_or(1.0e9, |d| d as f64);
    let result = if exact_h {
        search(graph, 0, strategy, &exact, &SearchPolicy::default())
    } else {
        search(graph, 0, strategy, &ZeroHeuristic, &SearchPolicy::default())
    };
    result.unwrap().solution
}

proptest! {
    #[test]
    fn ucs_matches_dijkstra(graph in arb_graph()) {
        let found = run(&graph, Strategy::UniformCost, false);
        let cost = found.as_deref().and_then(|p| graph.path_cost(p)).map(|(_, c)| c);
        prop_assert_eq!(cost, graph.optimal_cost());
    }

    #[test]
    fn astar_with_exact_heuristic_matches_dijkstra(graph in arb_graph()) {
        let found = run(&graph, Strategy::AStar, true);
        let cost = found.as_deref().and_then(|p| graph.path_cost(p)).map(|(_, c)| c);
        prop_assert_eq!(cost, graph.optimal_cost());
    }

    #[test]
    fn astar_with_zero_heuristic_equals_ucs(graph in arb_graph()) {
        prop_assert_eq!(
            run(&graph, Strategy::AStar, false),
            run(&graph, Strategy::UniformCost, false)
        );
    }

    #[test]
    fn bfs_matches_fewest_steps(graph in arb_graph()) {
        let found = run(&graph, Strategy::BreadthFirst, false);
        prop_assert_eq!(found.map(|p| p.len()), graph.fewest_steps());
    }

    #[test]
    fn every_strategy_is_complete_and_valid(graph in arb_graph()) {
        let reachable = graph.fewest_steps().is_some();
        for strategy in Strategy::ALL {
            let result = search(
                &graph,
                0,
                strategy,
                &ZeroHeuristic,
                &SearchPolicy::default(),
            )
            .unwrap();
            prop_assert_eq!(result.solution.is_some(), reachable, "{}", strategy);
            match result.solution {
                Some(path) => {
                    let end = graph.path_cost(&path).map(|(node, _)| node);
                    prop_assert_eq!(end, Some(graph.goal), "{}", strategy);
                }
                None => prop_assert_eq!(result.termination, TerminationReason::FrontierExhausted),
            }
            prop_assert!(result.stats.expansions <= graph.node_count() as u64);
        }
    }

    #[test]
    fn greedy_step_picks_minimum_estimate(graph in arb_graph(), start in 0usize..7) {
        let start = start % graph.node_count();
        let table = graph.cost_to_goal();
        let h = |_: &RandomGraph, s: &usize| table[*s].map_or(1000.0, |d| d as f64);
        match greedy_step(&graph, &start, &h) {
            None => prop_assert!(start == graph.goal || graph.edges[start].is_empty()),
            Some(choice) => {
                prop_assert!(start != graph.goal);
                let estimates: Vec<f64> = graph.edges[start]
                    .iter()
                    .map(|&(v, _)| h(&graph, &v))
                    .collect();
                let best = estimates.iter().copied().fold(f64::INFINITY, f64::min);
                prop_assert_eq!(choice.estimate, best);
                let first = estimates.iter().position(|&e| e == best);
                prop_assert_eq!(Some(choice.index), first);
                prop_assert_eq!(choice.action, choice.index);
            }
        }
    }
}
