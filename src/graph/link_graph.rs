//! Core graph structure — a fixed vertex set with one edge chain per vertex.

use log::warn;
use serde::Serialize;

use crate::types::{EdgeIter, EdgeList, EdgeNode, GraphError, GraphResult};

/// An undirected graph over a fixed set of vertices, stored as one owned
/// edge chain per vertex.
///
/// Every undirected edge `{u, v}` is stored twice: a record `u -> v` in
/// `u`'s chain and a record `v -> u` in `v`'s chain, each independently
/// owned. The vertex count is fixed at construction; edges can be added but
/// never removed.
///
/// The structure is single-threaded. Callers sharing a graph across threads
/// must wrap every operation in their own synchronization.
#[derive(Debug, Clone, Serialize)]
pub struct LinkGraph {
    /// Number of vertices, fixed at construction.
    vertex_count: usize,
    /// Slot `i` holds vertex `i`'s outgoing-edge chain.
    adjacency: Vec<EdgeList>,
}

impl LinkGraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    ///
    /// A zero-vertex graph is permitted and stays permanently empty.
    pub fn new(vertex_count: usize) -> Self {
        let mut adjacency = Vec::with_capacity(vertex_count);
        adjacency.resize_with(vertex_count, EdgeList::new);
        Self {
            vertex_count,
            adjacency,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of undirected edges.
    ///
    /// Every edge contributes one record to each endpoint's chain, so the
    /// total is half the summed chain lengths. Self-loops and parallel
    /// edges each count once. The pairing is not re-verified here; only
    /// [`add_edge`](Self::add_edge) creates records, which keeps it intact.
    pub fn num_edges(&self) -> usize {
        let records: usize = self.adjacency.iter().map(EdgeList::len).sum();
        records / 2
    }

    /// Number of records in `v`'s chain: incident undirected edges, with
    /// parallel edges counted per record and a self-loop counted twice.
    pub fn degree(&self, v: usize) -> GraphResult<usize> {
        self.adjacency
            .get(v)
            .map(EdgeList::len)
            .ok_or(GraphError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.vertex_count,
            })
    }

    /// Degrees of all vertices in index order.
    pub fn degrees(&self) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.iter().map(EdgeList::len)
    }

    /// Iterate `v`'s records, most recently added first. Yields nothing for
    /// an out-of-range vertex.
    pub fn edges_from(&self, v: usize) -> EdgeIter<'_> {
        self.adjacency
            .get(v)
            .map(EdgeList::iter)
            .unwrap_or_default()
    }

    /// First record of `v`'s chain: the most recently added edge.
    pub fn edge_head(&self, v: usize) -> GraphResult<&EdgeNode> {
        let chain = self
            .adjacency
            .get(v)
            .ok_or(GraphError::VertexOutOfRange {
                vertex: v,
                vertex_count: self.vertex_count,
            })?;
        chain.head().ok_or(GraphError::NoIncidentEdges(v))
    }

    /// Add an undirected edge between `v1` and `v2`.
    ///
    /// Both endpoints are validated before anything is inserted, so a
    /// rejected edge leaves the graph untouched. Self-loops are accepted
    /// and store two records in the same chain, raising that vertex's
    /// degree by 2. Repeating a pair stores independent parallel records;
    /// nothing is deduplicated.
    pub fn add_edge(&mut self, v1: usize, v2: usize) -> GraphResult<()> {
        for vertex in [v1, v2] {
            if vertex >= self.vertex_count {
                warn!(
                    "Edge ({}, {}) rejected: endpoint {} out of range for {} vertices",
                    v1, v2, vertex, self.vertex_count
                );
                return Err(GraphError::InvalidEdgeEndpoint {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }

        self.add_directed_edge(v1, v2);
        self.add_directed_edge(v2, v1);
        Ok(())
    }

    /// Insert a record `source -> dest` at the head of `source`'s chain.
    fn add_directed_edge(&mut self, source: usize, dest: usize) {
        self.adjacency[source].push_front(dest);
    }
}
