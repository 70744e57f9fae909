//! Test utilities for generating weighted graphs and checking spanning trees.
//!
//! The generators are seeded so that unit tests, benchmarks and the perf demo
//! all see the same graphs run after run. The reference weight is a dense
//! Prim implementation, independent of the disjoint-set forest, used to
//! cross-check Kruskal results on small inputs.

use rustc_hash::FxHashMap;

use crate::disjoint::{DisjointSets, ForestDisjointSets};
use crate::error::Result;
use crate::graph::{EdgeSetGraph, Graph, GraphEdge};

/// Configuration for generating random undirected graphs.
#[derive(Debug, Clone)]
pub struct RandomGraphConfig {
    /// Number of nodes, labelled `0..nodes`
    pub nodes: usize,
    /// Target number of distinct edges (capped at the complete graph)
    pub edges: usize,
    /// Seed for the weight and endpoint generator
    pub seed: u64,
    /// Start from a random spanning tree so the graph is connected
    pub connected: bool,
}

impl RandomGraphConfig {
    /// Connected graph averaging three edges per node.
    pub fn sparse(nodes: usize, seed: u64) -> Self {
        Self {
            nodes,
            edges: nodes * 3,
            seed,
            connected: true,
        }
    }

    /// Connected graph with a quarter of all possible edges.
    pub fn dense(nodes: usize, seed: u64) -> Self {
        Self {
            nodes,
            edges: nodes * nodes.saturating_sub(1) / 8,
            seed,
            connected: true,
        }
    }
}

/// Generate a random undirected graph with weights in `[0, 1)`.
///
/// # Algorithm
/// 1. Add nodes `0..nodes`
/// 2. If `connected`, attach every node `i > 0` to a random earlier node
/// 3. Add random distinct edges until the target count is reached
pub fn random_graph(config: &RandomGraphConfig) -> EdgeSetGraph<usize> {
    let mut rng = fastrand::Rng::with_seed(config.seed);
    let mut graph = EdgeSetGraph::new_undirected();

    let n = config.nodes;
    for i in 0..n {
        graph.add_node(i);
    }
    if n < 2 {
        return graph;
    }

    if config.connected {
        for i in 1..n {
            let parent = rng.usize(0..i);
            let _ = graph.add_weighted_edge(parent, i, rng.f64());
        }
    }

    let target = config.edges.min(n * (n - 1) / 2);
    while graph.edge_count() < target {
        let u = rng.usize(0..n);
        let v = rng.usize(0..n);
        if u != v {
            let _ = graph.add_weighted_edge(u, v, rng.f64());
        }
    }

    graph
}

/// Generate a `rows x cols` grid graph with random weights in `[0, 1)`.
pub fn grid_graph(rows: usize, cols: usize, seed: u64) -> EdgeSetGraph<usize> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut graph = EdgeSetGraph::new_undirected();

    for i in 0..rows * cols {
        graph.add_node(i);
    }
    for r in 0..rows {
        for c in 0..cols {
            let here = r * cols + c;
            if c + 1 < cols {
                let _ = graph.add_weighted_edge(here, here + 1, rng.f64());
            }
            if r + 1 < rows {
                let _ = graph.add_weighted_edge(here, here + cols, rng.f64());
            }
        }
    }

    graph
}

/// Number of connected components, counting isolated nodes.
///
/// # Errors
/// [`AlreadyRegistered`](crate::Error::AlreadyRegistered) if the graph lists a node twice and
/// [`NotRegistered`](crate::Error::NotRegistered) if an edge endpoint is not one of its nodes.
pub fn component_count<G: Graph>(graph: &G) -> Result<usize> {
    let mut forest = ForestDisjointSets::with_capacity(graph.node_count());
    for node in graph.nodes() {
        forest.make_set(node.clone())?;
    }
    for edge in graph.edges() {
        let (a, b) = edge.endpoints();
        forest.union(a, b)?;
    }
    Ok(forest.set_count())
}

/// Total weight of a minimum spanning forest, computed with dense Prim.
///
/// Unweighted edges count as zero. Intended for small graphs only: it uses
/// O(n²) memory and time.
pub fn reference_mst_weight<G: Graph>(graph: &G) -> f64 {
    let index: FxHashMap<&G::Node, usize> =
        graph.nodes().enumerate().map(|(i, node)| (node, i)).collect();
    let n = index.len();

    let mut dense = vec![f64::INFINITY; n * n];
    for edge in graph.edges() {
        let (a, b) = edge.endpoints();
        let (Some(&i), Some(&j)) = (index.get(a), index.get(b)) else {
            continue;
        };
        let weight = edge.weight().unwrap_or(0.0);
        if weight < dense[i * n + j] {
            dense[i * n + j] = weight;
            dense[j * n + i] = weight;
        }
    }

    let mut in_tree = vec![false; n];
    let mut best = vec![f64::INFINITY; n];
    let mut total = 0.0;

    // An unreachable pick (best = inf) starts the next component
    while let Some(v) = (0..n)
        .filter(|&v| !in_tree[v])
        .min_by(|&a, &b| best[a].total_cmp(&best[b]))
    {
        if best[v].is_finite() {
            total += best[v];
        }
        in_tree[v] = true;
        for u in 0..n {
            if !in_tree[u] && dense[v * n + u] < best[u] {
                best[u] = dense[v * n + u];
            }
        }
    }

    total
}
