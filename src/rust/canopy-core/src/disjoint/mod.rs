pub mod forest;
pub mod sets;

pub use forest::ForestDisjointSets;
pub use sets::DisjointSets;
