//! `WeightedGraph`: an explicit directed multigraph with labelled edges.
//!
//! Built through [`GraphBuilder`]. Nodes are declared in first-mention
//! order; edges out of a node are enumerated in the order they were added,
//! which is the order strategies see them. Actions are edge labels and must
//! be unique per source node.

use std::collections::{BTreeSet, HashMap};

use waypoint_kernel::problem::Problem;

use crate::contract::{HarnessWorld, WorldParseError};

/// An outgoing edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub label: String,
    pub to: usize,
    pub cost: f64,
}

/// A finite weighted graph world. States are node indices.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    names: Vec<String>,
    edges: Vec<Vec<Edge>>,
    start: usize,
    goals: BTreeSet<usize>,
    heuristic: Vec<f64>,
}

impl WeightedGraph {
    /// Start building a graph.
    #[must_use]
    pub fn builder() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Name of node `index`.
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Index of the node called `name`.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Outgoing edges of node `index`, in enumeration order.
    #[must_use]
    pub fn edges(&self, index: usize) -> &[Edge] {
        self.edges.get(index).map_or(&[], Vec::as_slice)
    }

    fn edge(&self, from: usize, label: &str) -> Option<&Edge> {
        self.edges(from).iter().find(|e| e.label == label)
    }
}

impl Problem for WeightedGraph {
    type State = usize;
    type Action = String;

    fn initial_state(&self) -> usize {
        self.start
    }

    fn is_goal(&self, state: &usize) -> bool {
        self.goals.contains(state)
    }

    fn get_actions(&self, state: &usize) -> Vec<String> {
        self.edges(*state).iter().map(|e| e.label.clone()).collect()
    }

    /// Unknown labels leave the state unchanged.
    fn get_successor(&self, state: &usize, action: &String) -> usize {
        self.edge(*state, action).map_or(*state, |e| e.to)
    }

    /// Unknown labels cost nothing; they are never offered by `get_actions`.
    fn get_cost(&self, state: &usize, action: &String) -> f64 {
        self.edge(*state, action).map_or(0.0, |e| e.cost)
    }
}

impl HarnessWorld for WeightedGraph {
    #[allow(clippy::unnecessary_literal_bound)]
    fn world_id(&self) -> &str {
        "weighted_graph"
    }

    fn heuristic(&self, state: &usize) -> f64 {
        self.heuristic.get(*state).copied().unwrap_or(0.0)
    }
}

/// Incremental [`WeightedGraph`] construction. Errors surface in
/// [`GraphBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    names: Vec<String>,
    index: HashMap<String, usize>,
    edges: Vec<Vec<Edge>>,
    start: Option<String>,
    goals: Vec<String>,
    heuristic: Vec<(String, f64)>,
}

impl GraphBuilder {
    /// Declare a node (no-op if already declared).
    #[must_use]
    pub fn node(mut self, name: &str) -> Self {
        self.declare(name);
        self
    }

    /// Add an edge labelled `"{from}->{to}"`.
    #[must_use]
    pub fn edge(self, from: &str, to: &str, cost: f64) -> Self {
        let label = format!("{from}->{to}");
        self.labeled_edge(from, to, &label, cost)
    }

    /// Add an edge with an explicit label.
    #[must_use]
    pub fn labeled_edge(mut self, from: &str, to: &str, label: &str, cost: f64) -> Self {
        let from_index = self.declare(from);
        let to_index = self.declare(to);
        self.edges[from_index].push(Edge {
            label: label.to_string(),
            to: to_index,
            cost,
        });
        self
    }

    /// Set the initial node. Defaults to the first declared node.
    #[must_use]
    pub fn start(mut self, name: &str) -> Self {
        self.start = Some(name.to_string());
        self
    }

    /// Add a goal node.
    #[must_use]
    pub fn goal(mut self, name: &str) -> Self {
        self.goals.push(name.to_string());
        self
    }

    /// Set the heuristic estimate of a node. Undeclared entries default to 0.
    #[must_use]
    pub fn heuristic(mut self, name: &str, estimate: f64) -> Self {
        self.heuristic.push((name.to_string(), estimate));
        self
    }

    fn declare(&mut self, name: &str) -> usize {
        if let Some(&i) = self.index.get(name) {
            return i;
        }
        let i = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), i);
        self.edges.push(Vec::new());
        i
    }

    fn lookup(&self, name: &str) -> Result<usize, WorldParseError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| WorldParseError::UnknownNode {
                name: name.to_string(),
            })
    }

    /// Validate and build.
    ///
    /// # Errors
    ///
    /// - [`WorldParseError::Empty`] if no node was declared.
    /// - [`WorldParseError::UnknownNode`] if the start, a goal or a
    ///   heuristic entry names an undeclared node.
    /// - [`WorldParseError::InvalidEdgeCost`] for negative or non-finite
    ///   edge costs.
    /// - [`WorldParseError::DuplicateLabel`] for a label repeated on one
    ///   source node.
    pub fn build(self) -> Result<WeightedGraph, WorldParseError> {
        if self.names.is_empty() {
            return Err(WorldParseError::Empty);
        }

        for (from, edges) in self.edges.iter().enumerate() {
            let mut labels = BTreeSet::new();
            for edge in edges {
                if !edge.cost.is_finite() || edge.cost < 0.0 {
                    return Err(WorldParseError::InvalidEdgeCost {
                        from: self.names[from].clone(),
                        to: self.names[edge.to].clone(),
                        cost: edge.cost.to_string(),
                    });
                }
                if !labels.insert(edge.label.as_str()) {
                    return Err(WorldParseError::DuplicateLabel {
                        from: self.names[from].clone(),
                        label: edge.label.clone(),
                    });
                }
            }
        }

        let start = match &self.start {
            Some(name) => self.lookup(name)?,
            None => 0,
        };
        let goals = self
            .goals
            .iter()
            .map(|name| self.lookup(name))
            .collect::<Result<BTreeSet<_>, _>>()?;
        let mut heuristic = vec![0.0; self.names.len()];
        for (name, estimate) in &self.heuristic {
            heuristic[self.lookup(name)?] = *estimate;
        }

        Ok(WeightedGraph {
            names: self.names,
            edges: self.edges,
            start,
            goals,
            heuristic,
        })
    }
}
