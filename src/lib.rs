//! LinkGraph — an undirected graph stored as per-vertex owned edge chains.
//!
//! Vertices are fixed at construction. Every undirected edge is stored
//! symmetrically, one record per endpoint, inserted at the head of each
//! endpoint's chain. On top of the structure sit a handful of structural
//! queries: edge count, vertex degree, Euler-circuit detection and ring
//! detection.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{has_euler_circuit, is_ring_graph, GraphBuilder, LinkGraph};
pub use types::{EdgeIter, EdgeList, EdgeNode, GraphError, GraphResult};
