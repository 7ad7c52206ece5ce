//! Fluent API for building LinkGraph instances.

use crate::types::GraphResult;

use super::LinkGraph;

/// Fluent builder for constructing a LinkGraph.
pub struct GraphBuilder {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
}

impl GraphBuilder {
    /// Create a builder for a graph with `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Queue an undirected edge between `v1` and `v2`.
    pub fn edge(&mut self, v1: usize, v2: usize) -> &mut Self {
        self.edges.push((v1, v2));
        self
    }

    /// Queue the edges of a ring through all vertices in index order. A
    /// one-vertex builder queues a single self-loop.
    pub fn ring(&mut self) -> &mut Self {
        for v in 0..self.vertex_count {
            self.edge(v, (v + 1) % self.vertex_count);
        }
        self
    }

    /// Queue the edges of a path through all vertices in index order.
    pub fn path(&mut self) -> &mut Self {
        for v in 1..self.vertex_count {
            self.edge(v - 1, v);
        }
        self
    }

    /// Queue edges joining `center` to every other vertex.
    pub fn star(&mut self, center: usize) -> &mut Self {
        for v in 0..self.vertex_count {
            if v != center {
                self.edge(center, v);
            }
        }
        self
    }

    /// Build the final LinkGraph, inserting queued edges in order.
    ///
    /// Endpoints are validated by the graph itself; the first rejected edge
    /// aborts the build.
    pub fn build(self) -> GraphResult<LinkGraph> {
        let mut graph = LinkGraph::new(self.vertex_count);
        for (v1, v2) in self.edges {
            graph.add_edge(v1, v2)?;
        }
        Ok(graph)
    }
}
