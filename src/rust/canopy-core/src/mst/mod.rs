pub mod kruskal;

pub use kruskal::{total_weight, KruskalConfig, KruskalMst};
