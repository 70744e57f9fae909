pub mod edge;
pub mod edge_set;
pub mod traits;

pub use edge::{Edge, GraphEdge};
pub use edge_set::EdgeSetGraph;
pub use traits::Graph;
