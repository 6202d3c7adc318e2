//! World contract: what the runner needs beyond the kernel's `Problem`.

use waypoint_kernel::problem::{Heuristic, Problem};

/// A world the harness runner can execute.
///
/// Worlds provide domain data only. They do NOT search, replay or hash;
/// those are engine and kernel concerns.
pub trait HarnessWorld: Problem {
    /// Unique world identifier (e.g. `"grid_maze"`).
    fn world_id(&self) -> &str;

    /// The world's own remaining-cost estimate. Defaults to zero, which is
    /// admissible for every world.
    fn heuristic(&self, _state: &Self::State) -> f64 {
        0.0
    }
}

/// Adapter exposing [`HarnessWorld::heuristic`] as a kernel [`Heuristic`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldHeuristic;

impl<W: HarnessWorld> Heuristic<W> for WorldHeuristic {
    fn estimate(&self, problem: &W, state: &W::State) -> f64 {
        problem.heuristic(state)
    }
}

/// Typed failure for building a world from text or parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldParseError {
    /// The text contained no grid rows.
    #[error("world text is empty")]
    Empty,
    /// A character outside the world's alphabet.
    #[error("unexpected character {found:?} at row {row}, column {column}")]
    UnexpectedChar {
        row: usize,
        column: usize,
        found: char,
    },
    /// A marker that must appear exactly once appeared `count` times.
    #[error("expected exactly one {marker:?}, found {count}")]
    MarkerCount { marker: char, count: usize },
    /// A car has no slot, or a slot has no car.
    #[error("car/slot mismatch: {detail}")]
    Unpaired { detail: String },
    /// A graph edge or goal names a node that was never declared.
    #[error("unknown node `{name}`")]
    UnknownNode { name: String },
    /// A graph edge has a negative or non-finite cost.
    #[error("edge {from} -> {to} has invalid cost {cost}")]
    InvalidEdgeCost { from: String, to: String, cost: String },
    /// Two edges out of `from` share `label`, so actions would be ambiguous.
    #[error("node `{from}` has more than one edge labelled `{label}`")]
    DuplicateLabel { from: String, label: String },
}
