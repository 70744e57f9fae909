//! Read-only graph contract consumed by the spanning tree engine.

use std::fmt::Debug;
use std::hash::Hash;

use super::edge::GraphEdge;

/// Read-only access to a graph's nodes and edges.
///
/// Implementations never hand out duplicate edges: two edges that compare
/// equal are the same edge.
pub trait Graph {
    type Node: Clone + Eq + Hash + Debug;
    type Edge: GraphEdge<Node = Self::Node> + Clone + Eq + Hash + Debug;

    fn is_directed(&self) -> bool;

    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;

    fn edges(&self) -> impl Iterator<Item = &Self::Edge>;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;
}
