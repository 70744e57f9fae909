use rayon::slice::ParallelSliceMut;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace, warn};

use crate::disjoint::{DisjointSets, ForestDisjointSets};
use crate::error::{Error, Result};
use crate::graph::{Graph, GraphEdge};

/// Tuning knobs for [`KruskalMst`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KruskalConfig {
    /// Edge count above which edges are sorted on the rayon thread pool
    pub parallel_sort_threshold: usize,
}

impl KruskalConfig {
    pub const PARALLEL_SORT_THRESHOLD: usize = 10_000;

    pub fn with_parallel_sort_threshold(mut self, threshold: usize) -> Self {
        self.parallel_sort_threshold = threshold;
        self
    }
}

impl Default for KruskalConfig {
    fn default() -> Self {
        Self {
            parallel_sort_threshold: Self::PARALLEL_SORT_THRESHOLD,
        }
    }
}

/// Minimum spanning forest calculator using Kruskal's greedy algorithm
///
/// The engine owns one disjoint-set forest over the graph's nodes. Every call
/// to [`compute_mst`](Self::compute_mst) clears it first, so one engine can be
/// reused across graphs. After a run the forest still describes the connected
/// components of the last graph.
///
/// The engine is a single-writer structure. Mutating the graph while a
/// computation is running is not supported.
#[derive(Clone)]
pub struct KruskalMst<N> {
    forest: ForestDisjointSets<N>,
    config: KruskalConfig,
}

impl<N: Clone + Eq + Hash + Debug> KruskalMst<N> {
    pub fn new() -> Self {
        Self::with_config(KruskalConfig::default())
    }

    pub fn with_config(config: KruskalConfig) -> Self {
        Self {
            forest: ForestDisjointSets::new(),
            config,
        }
    }

    pub fn config(&self) -> &KruskalConfig {
        &self.config
    }

    /// Forest left behind by the last computation
    pub fn forest(&self) -> &ForestDisjointSets<N> {
        &self.forest
    }

    /// Mutable access to the forest, for representative lookups
    pub fn forest_mut(&mut self) -> &mut ForestDisjointSets<N> {
        &mut self.forest
    }

    /// Compute a minimum spanning forest of an undirected weighted graph
    ///
    /// Edges are taken in ascending weight order and kept when their endpoints
    /// still lie in different components. The result holds
    /// `node_count - component_count` edges, a spanning tree when the graph is
    /// connected. The graph is never modified.
    ///
    /// Weights are validated as edges are reached. Unweighted edges sort first,
    /// then negative and NaN weights, then every valid weight, so a bad edge is
    /// reported before any component is merged.
    ///
    /// # Errors
    /// - [`Error::DirectedGraph`] if the graph is directed
    /// - [`Error::UnweightedEdge`] for the first edge without a weight
    /// - [`Error::NegativeWeight`] for the first edge whose weight is negative
    /// - [`Error::NanWeight`] for the first edge whose weight is NaN
    /// - [`Error::AlreadyRegistered`] if the graph lists a node twice
    /// - [`Error::NotRegistered`] if an edge endpoint is not one of the nodes
    ///
    /// # Complexity
    /// O(E log E), dominated by the sort
    pub fn compute_mst<G>(&mut self, graph: &G) -> Result<FxHashSet<G::Edge>>
    where
        G: Graph<Node = N>,
        G::Edge: Sync,
    {
        if graph.is_directed() {
            return Err(Error::DirectedGraph);
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "computing minimum spanning tree"
        );

        self.forest.clear();
        for node in graph.nodes() {
            self.forest.make_set(node.clone())?;
        }

        let mut edges: Vec<&G::Edge> = graph.edges().collect();
        if edges.len() > self.config.parallel_sort_threshold {
            edges.par_sort_by(|a, b| by_weight(*a, *b));
        } else {
            edges.sort_by(|a, b| by_weight(*a, *b));
        }

        let mut selected = FxHashSet::default();
        let mut total = 0.0;
        for edge in edges {
            let weight = checked_weight(edge)?;
            let (u, v) = edge.endpoints();

            let (Some(root_u), Some(root_v)) = (self.forest.find_set(u), self.forest.find_set(v))
            else {
                warn!(?edge, "edge endpoint is not a node of the graph");
                return Err(Error::NotRegistered);
            };

            if root_u != root_v {
                self.forest.union(u, v)?;
                trace!(?edge, weight, "edge accepted");
                total += weight;
                selected.insert(edge.clone());
            } else {
                trace!(?edge, "edge rejected, closes a cycle");
            }
        }

        debug!(
            selected = selected.len(),
            components = self.forest.set_count(),
            total_weight = total,
            "minimum spanning tree complete"
        );
        Ok(selected)
    }
}

impl<N: Clone + Eq + Hash + Debug> Default for KruskalMst<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Ascending weight, with every edge that fails validation ahead of the
/// valid ones: unweighted first, then negative or NaN weights
fn by_weight<E: GraphEdge>(a: &E, b: &E) -> Ordering {
    let (x, y) = (a.weight(), b.weight());
    validity(x).cmp(&validity(y)).then_with(|| match (x, y) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => Ordering::Equal,
    })
}

fn validity(weight: Option<f64>) -> u8 {
    match weight {
        None => 0,
        Some(w) if w.is_nan() || w < 0.0 => 1,
        Some(_) => 2,
    }
}

fn checked_weight<E: GraphEdge + Debug>(edge: &E) -> Result<f64> {
    match edge.weight() {
        None => {
            warn!(?edge, "edge has no weight");
            Err(Error::UnweightedEdge {
                edge: format!("{edge:?}"),
            })
        }
        Some(weight) if weight.is_nan() => {
            warn!(?edge, "edge weight is not a number");
            Err(Error::NanWeight {
                edge: format!("{edge:?}"),
            })
        }
        Some(weight) if weight < 0.0 => {
            warn!(?edge, weight, "edge weight is negative");
            Err(Error::NegativeWeight {
                edge: format!("{edge:?}"),
                weight,
            })
        }
        Some(weight) => Ok(weight),
    }
}

/// Sum of the weights of `edges`; unweighted edges count as zero
pub fn total_weight<'a, E>(edges: impl IntoIterator<Item = &'a E>) -> f64
where
    E: GraphEdge + 'a,
{
    edges.into_iter().filter_map(|edge| edge.weight()).sum()
}
