use rustc_hash::FxHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Read-only view of a graph edge
pub trait GraphEdge {
    type Node;

    /// The two endpoints, source first for directed edges
    fn endpoints(&self) -> (&Self::Node, &Self::Node);

    /// Weight of the edge, if it carries one
    fn weight(&self) -> Option<f64>;

    fn has_weight(&self) -> bool {
        self.weight().is_some()
    }

    fn is_directed(&self) -> bool;
}

/// Edge between two nodes with an optional weight
///
/// Equality and hashing look only at the endpoints and the direction flag. An
/// undirected edge between `a` and `b` equals the one between `b` and `a`
/// whatever their weights are.
#[derive(Clone)]
pub struct Edge<N> {
    a: N,
    b: N,
    weight: Option<f64>,
    directed: bool,
}

impl<N> Edge<N> {
    pub fn undirected(a: N, b: N) -> Self {
        Self {
            a,
            b,
            weight: None,
            directed: false,
        }
    }

    pub fn weighted(a: N, b: N, weight: f64) -> Self {
        Self {
            a,
            b,
            weight: Some(weight),
            directed: false,
        }
    }

    pub fn directed(source: N, target: N, weight: Option<f64>) -> Self {
        Self {
            a: source,
            b: target,
            weight,
            directed: true,
        }
    }
}

impl<N> GraphEdge for Edge<N> {
    type Node = N;

    #[inline]
    fn endpoints(&self) -> (&N, &N) {
        (&self.a, &self.b)
    }

    #[inline]
    fn weight(&self) -> Option<f64> {
        self.weight
    }

    #[inline]
    fn is_directed(&self) -> bool {
        self.directed
    }
}

impl<N: PartialEq> PartialEq for Edge<N> {
    fn eq(&self, other: &Self) -> bool {
        if self.directed != other.directed {
            return false;
        }
        (self.a == other.a && self.b == other.b)
            || (!self.directed && self.a == other.b && self.b == other.a)
    }
}

impl<N: Eq> Eq for Edge<N> {}

fn endpoint_hash<N: Hash>(node: &N) -> u64 {
    let mut hasher = FxHasher::default();
    node.hash(&mut hasher);
    hasher.finish()
}

impl<N: Hash> Hash for Edge<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.directed.hash(state);
        if self.directed {
            self.a.hash(state);
            self.b.hash(state);
        } else {
            // Order-independent so that both orientations collide
            let (ha, hb) = (endpoint_hash(&self.a), endpoint_hash(&self.b));
            ha.min(hb).hash(state);
            ha.max(hb).hash(state);
        }
    }
}

impl<N: fmt::Debug> fmt::Debug for Edge<N> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "-" };
        write!(fmt, "{:?}{}{:?}", self.a, arrow, self.b)?;
        if let Some(weight) = self.weight {
            write!(fmt, ":{weight}")?;
        }
        Ok(())
    }
}
