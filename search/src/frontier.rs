//! Frontiers: FIFO, LIFO and priority-ordered.
//!
//! No duplicate detection happens here. A state may sit in the frontier
//! several times under different paths; the search loop discards stale
//! entries when it pops them.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::node::{FrontierKey, NodeId};
use crate::strategy::Strategy;

/// A frontier entry: a node plus its ordering key.
#[derive(Debug, Clone, Copy)]
pub struct FrontierEntry {
    pub node: NodeId,
    pub key: FrontierKey,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

#[derive(Debug)]
enum Store {
    Fifo(VecDeque<FrontierEntry>),
    Lifo(Vec<FrontierEntry>),
    /// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse` to pop
    /// the lowest `(priority, creation_order)` first.
    Priority(BinaryHeap<Reverse<FrontierEntry>>),
}

/// Frontier manager for one search call.
///
/// Tracks the high-water mark of its size for statistics.
#[derive(Debug)]
pub struct Frontier {
    store: Store,
    high_water: u64,
}

impl Frontier {
    /// Oldest entry first.
    #[must_use]
    pub fn fifo() -> Self {
        Self::from_store(Store::Fifo(VecDeque::new()))
    }

    /// Newest entry first.
    #[must_use]
    pub fn lifo() -> Self {
        Self::from_store(Store::Lifo(Vec::new()))
    }

    /// Lowest key first.
    #[must_use]
    pub fn priority() -> Self {
        Self::from_store(Store::Priority(BinaryHeap::new()))
    }

    /// The frontier discipline `strategy` selects with.
    #[must_use]
    pub fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::BreadthFirst => Self::fifo(),
            Strategy::DepthFirst => Self::lifo(),
            Strategy::UniformCost | Strategy::GreedyBestFirst | Strategy::AStar => {
                Self::priority()
            }
        }
    }

    fn from_store(store: Store) -> Self {
        Self {
            store,
            high_water: 0,
        }
    }

    pub fn push(&mut self, entry: FrontierEntry) {
        match &mut self.store {
            Store::Fifo(queue) => queue.push_back(entry),
            Store::Lifo(stack) => stack.push(entry),
            Store::Priority(heap) => heap.push(Reverse(entry)),
        }
        let size = self.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Remove the next entry by this frontier's selection rule.
    #[must_use]
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        match &mut self.store {
            Store::Fifo(queue) => queue.pop_front(),
            Store::Lifo(stack) => stack.pop(),
            Store::Priority(heap) => heap.pop().map(|Reverse(entry)| entry),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match &self.store {
            Store::Fifo(queue) => queue.len(),
            Store::Lifo(stack) => stack.len(),
            Store::Priority(heap) => heap.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
