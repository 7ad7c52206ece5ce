//! Structural analyses — Euler-circuit and ring detection.

use crate::types::GraphResult;

use super::LinkGraph;

/// True iff every vertex has even degree.
///
/// Assumes the graph is connected; that is the caller's contract and is not
/// verified here, so a disconnected graph whose vertices all have even
/// degree reports true even though no single circuit covers it. A
/// zero-vertex graph reports true.
pub fn has_euler_circuit(graph: &LinkGraph) -> bool {
    graph.degrees().all(|degree| degree % 2 == 0)
}

/// True iff the graph is a single cycle covering every vertex.
///
/// Three checks, all computed and combined: every vertex has degree exactly
/// 2, the cycle walk anchored at vertex 0 returns to it after exactly
/// [`num_edges`](LinkGraph::num_edges) steps, and the edge count equals the
/// vertex count.
///
/// Vertex 0 must have at least one incident edge to anchor the walk;
/// otherwise this fails with `NoIncidentEdges` (`VertexOutOfRange` on a
/// zero-vertex graph).
pub fn is_ring_graph(graph: &LinkGraph) -> GraphResult<bool> {
    let start = graph.edge_head(0)?;
    let num_edges = graph.num_edges();

    let degrees_ok = graph.degrees().all(|degree| degree == 2);
    let walk_ok = cycle_walk_returns(graph, start.dest, num_edges);
    let count_ok = num_edges == graph.vertex_count();

    Ok(degrees_ok && walk_ok && count_ok)
}

/// Walk the cycle starting along vertex 0's head record and report whether
/// the walk is back at vertex 0 after exactly `num_edges` steps.
///
/// Each step leaves through the first record that does not point straight
/// back at the vertex just left; when every record does (parallel edges),
/// the head record is taken. The walk never exceeds `num_edges` steps, so
/// it terminates on graphs that fail the other checks too.
fn cycle_walk_returns(graph: &LinkGraph, first_dest: usize, num_edges: usize) -> bool {
    let mut prev = 0usize;
    let mut cur = first_dest;
    let mut steps = 1usize;

    while cur != 0 && steps < num_edges {
        let Some(next) = step_onward(graph, cur, prev) else {
            return false;
        };
        prev = cur;
        cur = next;
        steps += 1;
    }

    cur == 0 && steps == num_edges
}

/// Destination of the record leaving `vertex` without immediately reversing
/// the arrival edge from `came_from`. When every record points back at
/// `came_from` (parallel edges), the head record is taken. `None` when
/// `vertex` has no records at all.
fn step_onward(graph: &LinkGraph, vertex: usize, came_from: usize) -> Option<usize> {
    let mut records = graph.edges_from(vertex);
    let head = records.next()?;
    if head.dest != came_from {
        return Some(head.dest);
    }
    records
        .find(|record| record.dest != came_from)
        .map(|record| record.dest)
        .or(Some(head.dest))
}
