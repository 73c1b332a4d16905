//! Kosaraju's two-pass strongly connected components.
//!
//! Pass 1 records vertices in DFS finish order on the original graph. Pass 2
//! pops that order and runs a DFS on the transpose from every vertex not yet
//! claimed; each such DFS tree is one component.

use super::Component;
use crate::graph::{Graph, VertexId};
use crate::metrics::{Metrics, counters};

struct Frame {
    vertex: VertexId,
    next_edge: usize,
}

#[derive(Default)]
struct Tally {
    dfs_calls: u64,
    edges_visited: u64,
}

/// Finds all strongly connected components of `graph` using Kosaraju's
/// algorithm. Produces the same partition as [`super::tarjan_scc`]; members of
/// each component are in DFS pre-order over the transpose.
///
/// # Complexity
/// * Time: O(V + E), two full passes plus one transpose
/// * Space: O(V + E) for the transpose of a directed graph
pub fn kosaraju_scc(graph: &Graph) -> Vec<Component> {
    let mut metrics = Metrics::new("KosarajuSCC");
    kosaraju_scc_with_metrics(graph, &mut metrics)
}

pub fn kosaraju_scc_with_metrics(graph: &Graph, metrics: &mut Metrics) -> Vec<Component> {
    metrics.start_timer();

    let n = graph.vertex_count();
    let mut tally = Tally::default();
    let mut visited = vec![false; n];
    let mut finish_order: Vec<VertexId> = Vec::with_capacity(n);

    for start in 0..n {
        if !visited[start] {
            finish_pass(graph, start, &mut visited, &mut finish_order, &mut tally);
        }
    }

    let transpose = graph.transpose();
    visited.fill(false);
    let mut result: Vec<Component> = Vec::new();

    while let Some(vertex) = finish_order.pop() {
        if visited[vertex] {
            continue;
        }
        let mut members = Vec::new();
        collect_pass(&transpose, vertex, &mut visited, &mut members, &mut tally);
        result.push(Component { members });
    }

    metrics.add(counters::DFS_CALLS, tally.dfs_calls);
    metrics.add(counters::EDGES_VISITED, tally.edges_visited);
    metrics.set(counters::SCCS_FOUND, result.len() as u64);
    metrics.stop_timer();
    log::debug!(
        "kosaraju: {} components over {} vertices, {} edges visited",
        result.len(),
        n,
        tally.edges_visited
    );

    result
}

/// Post-order DFS from `start`, appending each vertex once all of its
/// descendants are finished.
fn finish_pass(
    graph: &Graph,
    start: VertexId,
    visited: &mut [bool],
    finish_order: &mut Vec<VertexId>,
    tally: &mut Tally,
) {
    visited[start] = true;
    tally.dfs_calls += 1;
    let mut call_stack = vec![Frame {
        vertex: start,
        next_edge: 0,
    }];

    while let Some(frame) = call_stack.last_mut() {
        let v = frame.vertex;
        if let Some(edge) = graph.out_edges(v).get(frame.next_edge) {
            frame.next_edge += 1;
            tally.edges_visited += 1;
            if !visited[edge.to] {
                visited[edge.to] = true;
                tally.dfs_calls += 1;
                call_stack.push(Frame {
                    vertex: edge.to,
                    next_edge: 0,
                });
            }
        } else {
            call_stack.pop();
            finish_order.push(v);
        }
    }
}

/// Pre-order DFS from `start`, appending each vertex when first reached.
fn collect_pass(
    graph: &Graph,
    start: VertexId,
    visited: &mut [bool],
    members: &mut Vec<VertexId>,
    tally: &mut Tally,
) {
    visited[start] = true;
    members.push(start);
    tally.dfs_calls += 1;
    let mut call_stack = vec![Frame {
        vertex: start,
        next_edge: 0,
    }];

    while let Some(frame) = call_stack.last_mut() {
        let v = frame.vertex;
        if let Some(edge) = graph.out_edges(v).get(frame.next_edge) {
            frame.next_edge += 1;
            tally.edges_visited += 1;
            if !visited[edge.to] {
                visited[edge.to] = true;
                members.push(edge.to);
                tally.dfs_calls += 1;
                call_stack.push(Frame {
                    vertex: edge.to,
                    next_edge: 0,
                });
            }
        } else {
            call_stack.pop();
        }
    }
}
