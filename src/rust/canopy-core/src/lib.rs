pub mod disjoint;
pub mod error;
pub mod graph;
pub mod mst;
pub mod test_utils;

#[cfg(test)]
mod tests;

// Re-export commonly used types for easier access
pub use disjoint::{DisjointSets, ForestDisjointSets};
pub use error::{Error, ErrorKind, Result};
pub use graph::{Edge, EdgeSetGraph, Graph, GraphEdge};
pub use mst::{total_weight, KruskalConfig, KruskalMst};
pub use test_utils::{grid_graph, random_graph, RandomGraphConfig};
