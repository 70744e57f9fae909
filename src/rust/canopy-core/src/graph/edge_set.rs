use rustc_hash::FxHashSet;
use std::fmt::Debug;
use std::hash::Hash;

use super::edge::{Edge, GraphEdge};
use super::traits::Graph;
use crate::error::{Error, Result};

/// Graph stored as a node list plus a deduplicated edge list
///
/// Nodes and edges enumerate in insertion order, which keeps every algorithm
/// run over the graph reproducible.
#[derive(Debug, Clone)]
pub struct EdgeSetGraph<N> {
    directed: bool,
    nodes: Vec<N>,
    node_index: FxHashSet<N>,
    edges: Vec<Edge<N>>,
    edge_index: FxHashSet<Edge<N>>,
}

impl<N: Clone + Eq + Hash + Debug> EdgeSetGraph<N> {
    fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: Vec::new(),
            node_index: FxHashSet::default(),
            edges: Vec::new(),
            edge_index: FxHashSet::default(),
        }
    }

    pub fn new_undirected() -> Self {
        Self::new(false)
    }

    pub fn new_directed() -> Self {
        Self::new(true)
    }

    /// Add a node, returning `false` if it was already present
    pub fn add_node(&mut self, node: N) -> bool {
        if !self.node_index.insert(node.clone()) {
            return false;
        }
        self.nodes.push(node);
        true
    }

    /// Add an edge between two existing nodes
    ///
    /// Returns `false` if an equal edge is already present; the stored edge
    /// and its weight are left as they were.
    ///
    /// # Errors
    /// - [`Error::MismatchedDirection`] if the edge's direction flag differs
    ///   from the graph's
    /// - [`Error::NotRegistered`] if either endpoint is not a node
    pub fn add_edge(&mut self, edge: Edge<N>) -> Result<bool> {
        if edge.is_directed() != self.directed {
            return Err(Error::MismatchedDirection {
                edge: format!("{edge:?}"),
            });
        }

        let (a, b) = edge.endpoints();
        if !self.node_index.contains(a) || !self.node_index.contains(b) {
            return Err(Error::NotRegistered);
        }

        if !self.edge_index.insert(edge.clone()) {
            return Ok(false);
        }
        self.edges.push(edge);
        Ok(true)
    }

    /// Add a weighted edge oriented the way the graph is
    pub fn add_weighted_edge(&mut self, a: N, b: N, weight: f64) -> Result<bool> {
        let edge = if self.directed {
            Edge::directed(a, b, Some(weight))
        } else {
            Edge::weighted(a, b, weight)
        };
        self.add_edge(edge)
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.node_index.contains(node)
    }

    pub fn contains_edge(&self, edge: &Edge<N>) -> bool {
        self.edge_index.contains(edge)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.node_index.clear();
        self.edges.clear();
        self.edge_index.clear();
    }
}

impl<N: Clone + Eq + Hash + Debug> Graph for EdgeSetGraph<N> {
    type Node = N;
    type Edge = Edge<N>;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.iter()
    }

    fn edges(&self) -> impl Iterator<Item = &Edge<N>> {
        self.edges.iter()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
