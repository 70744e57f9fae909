use thiserror::Error;

/// Broad category of a failure.
///
/// Every failure the crate reports is a violated structural precondition on a
/// supplied argument. Missing arguments cannot be expressed through the API,
/// so there is no separate category for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
}

/// Errors raised by the disjoint-set forest and the spanning tree engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// `make_set` was called for an element that already owns a node
    #[error("element is already registered")]
    AlreadyRegistered,

    /// An operation that requires membership was given an unknown element
    #[error("element is not registered")]
    NotRegistered,

    /// Spanning trees are only defined for undirected graphs
    #[error("minimum spanning tree requires an undirected graph")]
    DirectedGraph,

    /// An edge reached during edge selection carries no weight
    #[error("edge {edge} has no weight")]
    UnweightedEdge { edge: String },

    /// An edge reached during edge selection carries a negative weight
    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight { edge: String, weight: f64 },

    /// An edge reached during edge selection carries a NaN weight
    #[error("edge {edge} has a weight that is not a number")]
    NanWeight { edge: String },

    /// An edge's directedness disagrees with the graph it is added to
    #[error("edge {edge} does not match the directedness of the graph")]
    MismatchedDirection { edge: String },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::AlreadyRegistered
            | Error::NotRegistered
            | Error::DirectedGraph
            | Error::UnweightedEdge { .. }
            | Error::NegativeWeight { .. }
            | Error::NanWeight { .. }
            | Error::MismatchedDirection { .. } => ErrorKind::InvalidArgument,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
