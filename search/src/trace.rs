//! `SearchTrace`: expansion-event log and run statistics.
//!
//! The decision surface of a search is the ordered list of expansions. Two
//! runs of one strategy over one problem must produce identical logs; the
//! canonical JSON digest makes that checkable across runs and processes.

use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash};

use crate::strategy::Strategy;

/// Domain prefix for search trace content hashing.
pub const DOMAIN_SEARCH_TRACE: &[u8] = b"WAYPOINT::SEARCH_TRACE::V1\0";

/// Aggregate counters for one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes expanded, the seeding of the initial state included.
    pub expansions: u64,
    /// Frontier entries created.
    pub generated: u64,
    /// Entries popped and dropped because their state was already explored.
    pub duplicates_discarded: u64,
    /// Largest frontier size reached.
    pub frontier_high_water: u64,
}

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The initial state is a goal; nothing was expanded.
    GoalAtStart,
    /// A goal node was popped.
    GoalReached { node_id: u64, depth: u32 },
    /// The frontier emptied and no successor was ever cut by the depth
    /// limit: the reachable state space holds no goal.
    FrontierExhausted,
    /// The frontier emptied, but at least one expansion had its successors
    /// cut by `max_depth`. A goal may exist deeper.
    DepthLimited,
    /// `max_expansions` was reached before a goal was popped.
    ExpansionBudgetExceeded,
}

impl TerminationReason {
    /// Stable snake-case tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GoalAtStart => "goal_at_start",
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::DepthLimited => "depth_limited",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }

    /// Whether the search ended with a solution.
    #[must_use]
    pub const fn found_goal(self) -> bool {
        matches!(self, Self::GoalAtStart | Self::GoalReached { .. })
    }
}

/// A single pop-and-expand event.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandEvent {
    /// Total order of expansions (root = 0).
    pub expansion_order: u64,
    /// The expanded node.
    pub node_id: u64,
    /// Its parent (`None` for the root).
    pub parent_id: Option<u64>,
    pub depth: u32,
    /// Cumulative cost; zero for strategies that do not read costs.
    pub g_cost: f64,
    /// The priority the node was popped with.
    pub priority: f64,
    /// Frontier entries pushed by this expansion.
    pub children: u64,
}

/// The complete search log.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTrace {
    pub strategy: Strategy,
    /// Ordered expansion events.
    pub expansions: Vec<ExpandEvent>,
    pub stats: SearchStats,
    pub termination: TerminationReason,
}

impl SearchTrace {
    /// Serialize to canonical JSON bytes (sorted keys, compact).
    ///
    /// Costs and priorities are rendered as decimal strings, since canonical
    /// JSON carries integers only.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical bytes under [`DOMAIN_SEARCH_TRACE`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_TRACE, &bytes))
    }

    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "stats": stats_to_json(&self.stats),
            "strategy": self.strategy.name(),
            "termination": termination_to_json(self.termination),
        })
    }
}

fn render_float(value: f64) -> String {
    value.to_string()
}

fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "children": e.children,
        "depth": e.depth,
        "expansion_order": e.expansion_order,
        "g_cost": render_float(e.g_cost),
        "node_id": e.node_id,
        "parent_id": e.parent_id,
        "priority": render_float(e.priority),
    })
}

fn stats_to_json(s: &SearchStats) -> serde_json::Value {
    serde_json::json!({
        "duplicates_discarded": s.duplicates_discarded,
        "expansions": s.expansions,
        "frontier_high_water": s.frontier_high_water,
        "generated": s.generated,
    })
}

fn termination_to_json(t: TerminationReason) -> serde_json::Value {
    match t {
        TerminationReason::GoalReached { node_id, depth } => {
            serde_json::json!({"depth": depth, "node_id": node_id, "type": t.as_str()})
        }
        other => serde_json::json!({"type": other.as_str()}),
    }
}
