//! Search nodes, frontier keys, and the per-call node arena.
//!
//! Paths are stored as parent pointers: each node records its parent and
//! the one action that produced it. Entries that share a prefix share the
//! prefix nodes, and the full action sequence is rebuilt only once, when a
//! goal is popped.

use std::cmp::Ordering;

use waypoint_kernel::cost::Cost;

/// Index of a node in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position in the arena (root = 0).
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// Stable numeric form for traces.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0 as u64
    }
}

/// An immutable node in the search tree.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// State reached by this node's path.
    pub state: S,
    /// Parent node (`None` for the root).
    pub parent: Option<NodeId>,
    /// The action that produced this node from its parent.
    pub action: Option<A>,
    /// Path length in actions (root = 0).
    pub depth: u32,
    /// Cumulative path cost. Only strategies that read costs accumulate it;
    /// it stays zero for the others.
    pub g_cost: Cost,
}

/// Append-only node storage for one search call.
#[derive(Debug)]
pub struct NodeArena<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A: Clone> NodeArena<S, A> {
    /// Create an arena holding only the root.
    #[must_use]
    pub fn with_root(state: S) -> (Self, NodeId) {
        let arena = Self {
            nodes: vec![SearchNode {
                state,
                parent: None,
                action: None,
                depth: 0,
                g_cost: Cost::ZERO,
            }],
        };
        (arena, NodeId(0))
    }

    /// Append a child of `parent`.
    pub fn push_child(
        &mut self,
        parent: NodeId,
        state: S,
        action: A,
        depth: u32,
        g_cost: Cost,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            state,
            parent: Some(parent),
            action: Some(action),
            depth,
            g_cost,
        });
        id
    }

    /// Look up a node. Ids are only ever handed out by this arena, so the
    /// lookup cannot miss.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S, A> {
        &self.nodes[id.0]
    }

    /// Number of nodes created so far, root included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the root is created with the arena.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Actions from the root to `id`, in forward order.
    #[must_use]
    pub fn reconstruct_actions(&self, id: NodeId) -> Vec<A> {
        let mut actions = Vec::with_capacity(self.get(id).depth as usize);
        let mut current = Some(id);

        while let Some(node_id) = current {
            let node = self.get(node_id);
            if let Some(action) = &node.action {
                actions.push(action.clone());
            }
            current = node.parent;
        }

        actions.reverse();
        actions
    }
}

/// A frontier priority: cost-like, lower is better.
///
/// Unlike [`Cost`], priorities may come from unvalidated heuristics, so any
/// `f64` is accepted. Ordering uses `f64::total_cmp`; `-0.0` is normalized
/// to `0.0` so that a heuristic returning either does not reorder ties, and
/// every NaN becomes the positive quiet NaN, which sorts after `+inf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Priority(f64);

impl Priority {
    /// Priority shared by every entry of an unordered (FIFO/LIFO) frontier.
    pub const ZERO: Self = Self(0.0);

    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(f64::NAN);
        }
        Self(value + 0.0)
    }

    /// The raw value.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl From<Cost> for Priority {
    fn from(cost: Cost) -> Self {
        Self(cost.get())
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// The frontier ordering key: `(priority, creation_order)`.
///
/// Lower priority first, then older creation order. `creation_order` is
/// unique within a search call, so the order is total and ties resolve to
/// the earliest-inserted entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub priority: Priority,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
