//! Tie-break locks: among equal priorities the earliest-inserted entry is
//! popped first, so action enumeration order decides between equally good
//! solutions, and repeated runs agree.

use waypoint_harness::contract::WorldHeuristic;
use waypoint_harness::worlds::weighted_graph::WeightedGraph;
use waypoint_kernel::problem::{Problem, ZeroHeuristic};
use waypoint_search::policy::SearchPolicy;
use waypoint_search::{search, Strategy};

/// Two equal-cost routes from `s` to `g`, through `first` then `second`.
fn twin_routes(first: &str, second: &str) -> WeightedGraph {
    WeightedGraph::builder()
        .node("s")
        .edge("s", first, 1.0)
        .edge("s", second, 1.0)
        .edge(first, "g", 1.0)
        .edge(second, "g", 1.0)
        .goal("g")
        .build()
        .unwrap()
}

fn solve(graph: &WeightedGraph, strategy: Strategy) -> Vec<String> {
    search(
        graph,
        graph.initial_state(),
        strategy,
        &ZeroHeuristic,
        &SearchPolicy::default(),
    )
    .unwrap()
    .solution
    .unwrap()
}

#[test]
fn prioritized_strategies_prefer_earlier_insertion() {
    let graph = twin_routes("a", "b");
    for strategy in [
        Strategy::BreadthFirst,
        Strategy::UniformCost,
        Strategy::GreedyBestFirst,
        Strategy::AStar,
    ] {
        assert_eq!(solve(&graph, strategy), vec!["s->a", "a->g"], "{strategy}");
    }
}

#[test]
fn depth_first_prefers_latest_insertion() {
    let graph = twin_routes("a", "b");
    assert_eq!(solve(&graph, Strategy::DepthFirst), vec!["s->b", "b->g"]);
}

#[test]
fn enumeration_order_is_load_bearing() {
    let graph = twin_routes("b", "a");
    assert_eq!(solve(&graph, Strategy::UniformCost), vec!["s->b", "b->g"]);
    assert_eq!(solve(&graph, Strategy::DepthFirst), vec!["s->a", "a->g"]);
}

#[test]
fn repeated_runs_are_identical() {
    let graph = twin_routes("a", "b");
    for strategy in Strategy::ALL {
        let first = search(
            &graph,
            graph.initial_state(),
            strategy,
            &WorldHeuristic,
            &SearchPolicy::default().with_trace(),
        )
        .unwrap();
        for _ in 0..10 {
            let again = search(
                &graph,
                graph.initial_state(),
                strategy,
                &WorldHeuristic,
                &SearchPolicy::default().with_trace(),
            )
            .unwrap();
            assert_eq!(again.solution, first.solution, "{strategy}");
            assert_eq!(again.stats, first.stats, "{strategy}");
            assert_eq!(again.trace, first.trace, "{strategy}");
        }
    }
}
