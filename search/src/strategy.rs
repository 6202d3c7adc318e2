//! Search strategy selection.

use std::fmt;
use std::str::FromStr;

/// One of the five frontier disciplines the engine supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// FIFO frontier; fewest actions when costs are uniform.
    BreadthFirst,
    /// LIFO frontier; no optimality guarantee.
    DepthFirst,
    /// Min-heap on cumulative cost `g`.
    UniformCost,
    /// Min-heap on the successor's heuristic estimate `h`.
    GreedyBestFirst,
    /// Min-heap on `f = g + h`.
    AStar,
}

impl Strategy {
    /// Every strategy, in the order they are documented.
    pub const ALL: [Strategy; 5] = [
        Self::BreadthFirst,
        Self::DepthFirst,
        Self::UniformCost,
        Self::GreedyBestFirst,
        Self::AStar,
    ];

    /// Stable short name, used in traces and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::UniformCost => "ucs",
            Self::GreedyBestFirst => "greedy",
            Self::AStar => "astar",
        }
    }

    /// Whether the strategy calls the heuristic.
    #[must_use]
    pub const fn is_informed(self) -> bool {
        matches!(self, Self::GreedyBestFirst | Self::AStar)
    }

    /// Whether the strategy calls `Problem::get_cost`.
    #[must_use]
    pub const fn reads_costs(self) -> bool {
        matches!(self, Self::UniformCost | Self::AStar)
    }

    /// Whether the frontier is ordered by priority rather than insertion.
    #[must_use]
    pub const fn is_prioritized(self) -> bool {
        !matches!(self, Self::BreadthFirst | Self::DepthFirst)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A strategy name did not match any known strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy `{name}` (expected one of: bfs, dfs, ucs, greedy, astar)")]
pub struct ParseStrategyError {
    pub name: String,
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| ParseStrategyError {
                name: s.to_string(),
            })
    }
}
