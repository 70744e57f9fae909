use rustc_hash::FxHashSet;

use crate::test_utils::{component_count, reference_mst_weight};
use crate::{
    random_graph, total_weight, DisjointSets, Edge, EdgeSetGraph, Error, ForestDisjointSets,
    Graph, GraphEdge, KruskalMst, RandomGraphConfig,
};

/// Graph that hands out whatever it was built with, unchecked
struct ListedGraph {
    nodes: Vec<u8>,
    edges: Vec<Edge<u8>>,
}

impl Graph for ListedGraph {
    type Node = u8;
    type Edge = Edge<u8>;

    fn is_directed(&self) -> bool {
        false
    }

    fn nodes(&self) -> impl Iterator<Item = &u8> {
        self.nodes.iter()
    }

    fn edges(&self) -> impl Iterator<Item = &Edge<u8>> {
        self.edges.iter()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[test]
fn test_union_converges_find() {
    let n = 200;
    let mut forest = ForestDisjointSets::new();
    for i in 0..n {
        forest.make_set(i).unwrap();
    }

    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..500 {
        let a = rng.usize(0..n);
        let b = rng.usize(0..n);
        forest.union(&a, &b).unwrap();
        assert_eq!(forest.find_set(&a), forest.find_set(&b));
    }
}

#[test]
fn test_classes_are_identical_or_disjoint() {
    let n = 60;
    let mut forest = ForestDisjointSets::new();
    for i in 0..n {
        forest.make_set(i).unwrap();
    }
    let mut rng = fastrand::Rng::with_seed(5);
    for _ in 0..40 {
        forest.union(&rng.usize(0..n), &rng.usize(0..n)).unwrap();
    }

    let classes: Vec<FxHashSet<usize>> = (0..n)
        .map(|x| forest.elements_of_set_containing(&x).unwrap())
        .collect();

    for x in 0..n {
        assert!(classes[x].contains(&x));
        for y in 0..n {
            let same = classes[x] == classes[y];
            let disjoint = classes[x].is_disjoint(&classes[y]);
            assert!(same ^ disjoint);
        }
    }

    let partition = forest.partition();
    assert_eq!(partition.len(), forest.current_representatives().len());
    assert_eq!(partition.iter().map(Vec::len).sum::<usize>(), n);
}

#[test]
fn test_clear_forgets_everything() {
    let mut forest = ForestDisjointSets::new();
    for e in ["x", "y", "z"] {
        forest.make_set(e).unwrap();
    }
    forest.union(&"x", &"z").unwrap();

    forest.clear();

    for e in ["x", "y", "z"] {
        assert!(!forest.is_present(&e));
    }
    assert!(forest.current_representatives().is_empty());
    assert_eq!(forest.elements_of_set_containing(&"x"), Err(Error::NotRegistered));
}

#[test]
fn test_make_set_twice_is_invalid_argument() {
    let mut forest = ForestDisjointSets::new();
    forest.make_set(1).unwrap();

    let error = forest.make_set(1).unwrap_err();
    assert_eq!(error, Error::AlreadyRegistered);
    assert_eq!(error.kind(), crate::ErrorKind::InvalidArgument);
}

#[test]
fn test_connected_graph_yields_n_minus_one_edges() {
    for nodes in [1, 2, 10, 250] {
        let graph = random_graph(&RandomGraphConfig::sparse(nodes, nodes as u64));
        let mut kruskal = KruskalMst::new();
        let mst = kruskal.compute_mst(&graph).unwrap();

        assert_eq!(mst.len(), nodes - 1);
        assert!(mst.iter().all(|edge| graph.contains_edge(edge)));
        assert!((total_weight(&mst) - reference_mst_weight(&graph)).abs() < 1e-9);
    }
}

#[test]
fn test_result_is_acyclic_and_spanning() {
    let graph = random_graph(&RandomGraphConfig {
        nodes: 80,
        edges: 400,
        seed: 17,
        connected: false,
    });
    let mut kruskal = KruskalMst::new();
    let mst = kruskal.compute_mst(&graph).unwrap();

    // Rebuilding components from the result alone must reproduce the graph's
    let mut forest = ForestDisjointSets::new();
    for node in graph.nodes() {
        forest.make_set(*node).unwrap();
    }
    for edge in &mst {
        let (a, b) = edge.endpoints();
        assert!(forest.union(a, b).unwrap(), "result closes a cycle at {edge:?}");
    }
    assert_eq!(Ok(forest.set_count()), component_count(&graph));
}

#[test]
fn test_square_with_diagonal_prefers_light_path() {
    let mut graph = EdgeSetGraph::new_undirected();
    for node in ["A", "B", "C", "D"] {
        graph.add_node(node);
    }
    for (a, b, w) in [
        ("A", "B", 1.0),
        ("B", "C", 2.0),
        ("C", "D", 3.0),
        ("A", "D", 10.0),
        ("A", "C", 4.0),
    ] {
        graph.add_weighted_edge(a, b, w).unwrap();
    }

    let mut kruskal = KruskalMst::new();
    let mst = kruskal.compute_mst(&graph).unwrap();
    assert_eq!(total_weight(&mst), 6.0);
    assert!(mst.contains(&Edge::undirected("C", "B")));
    assert!(!mst.contains(&Edge::undirected("A", "C")));
    assert!(!mst.contains(&Edge::undirected("D", "A")));
}

#[test]
fn test_dangling_endpoint_is_rejected() {
    let graph = ListedGraph {
        nodes: vec![1, 2],
        edges: vec![Edge::weighted(1, 2, 1.0), Edge::weighted(2, 3, 2.0)],
    };

    let mut kruskal = KruskalMst::new();
    assert_eq!(kruskal.compute_mst(&graph), Err(Error::NotRegistered));
    assert_eq!(component_count(&graph), Err(Error::NotRegistered));
}

#[test]
fn test_duplicate_node_is_rejected() {
    let graph = ListedGraph {
        nodes: vec![1, 2, 1],
        edges: vec![Edge::weighted(1, 2, 1.0)],
    };

    let mut kruskal = KruskalMst::new();
    assert_eq!(kruskal.compute_mst(&graph), Err(Error::AlreadyRegistered));
    assert_eq!(component_count(&graph), Err(Error::AlreadyRegistered));
}

#[test]
fn test_input_graph_is_untouched() {
    let graph = random_graph(&RandomGraphConfig::sparse(20, 2));
    let before: Vec<_> = graph.edges().cloned().collect();

    let mut kruskal = KruskalMst::new();
    kruskal.compute_mst(&graph).unwrap();

    let after: Vec<_> = graph.edges().cloned().collect();
    assert_eq!(before, after);
    assert_eq!(graph.node_count(), 20);
}
