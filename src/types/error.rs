//! Error types for the link-graph library.

use thiserror::Error;

/// All errors that can occur in the link-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Edge insertion given an endpoint outside the vertex range.
    #[error("Edge endpoint {vertex} out of range for {vertex_count} vertices")]
    InvalidEdgeEndpoint { vertex: usize, vertex_count: usize },

    /// Query given a vertex index outside the vertex range.
    #[error("Vertex {vertex} out of range for {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// Ring walk anchored on a vertex with no incident edges.
    #[error("Vertex {0} has no incident edges")]
    NoIncidentEdges(usize),
}

/// Convenience result type for link-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
