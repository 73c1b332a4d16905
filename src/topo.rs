//! Topological ordering.
//!
//! Two strategies sit behind [`TopoAlgorithm`]:
//!
//! * **Kahn**: in-degree counting with a FIFO queue. It is the only cycle
//!   gate in the crate: a graph it cannot fully order is reported as
//!   [`GraphError::CycleDetected`], never as a partial order.
//! * **DFS**: reversed post-order. It assumes the input is acyclic and does
//!   not check; on a cyclic graph it silently returns an order that violates
//!   some edge. Run Kahn's first when acyclicity is not already known.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::error::GraphError;
use crate::graph::{Graph, VertexId};
use crate::metrics::{Metrics, counters};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TopoAlgorithm {
    #[default]
    Kahn,
    Dfs,
}

impl TopoAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            TopoAlgorithm::Kahn => "KahnTopologicalSort",
            TopoAlgorithm::Dfs => "DFSTopologicalSort",
        }
    }

    /// True if this strategy reports cycles instead of returning an order.
    pub fn detects_cycles(self) -> bool {
        matches!(self, TopoAlgorithm::Kahn)
    }

    pub fn compute_order(
        self,
        graph: &Graph,
        metrics: &mut Metrics,
    ) -> Result<Vec<VertexId>, GraphError> {
        match self {
            TopoAlgorithm::Kahn => kahn_sort_with_metrics(graph, metrics),
            TopoAlgorithm::Dfs => Ok(dfs_sort_with_metrics(graph, metrics)),
        }
    }

    pub fn run(self, graph: &Graph) -> (Result<Vec<VertexId>, GraphError>, Metrics) {
        let mut metrics = Metrics::new(self.name());
        let order = self.compute_order(graph, &mut metrics);
        (order, metrics)
    }
}

impl std::fmt::Display for TopoAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopoAlgorithm::Kahn => write!(f, "kahn"),
            TopoAlgorithm::Dfs => write!(f, "dfs"),
        }
    }
}

/// Topologically sorts `graph` with Kahn's algorithm, failing on cycles.
pub fn topological_sort(graph: &Graph) -> Result<Vec<VertexId>, GraphError> {
    kahn_sort(graph)
}

pub fn kahn_sort(graph: &Graph) -> Result<Vec<VertexId>, GraphError> {
    let mut metrics = Metrics::new(TopoAlgorithm::Kahn.name());
    kahn_sort_with_metrics(graph, &mut metrics)
}

/// Kahn's algorithm. Zero in-degree vertices are seeded in increasing index
/// order and dequeued first-in first-out, so ties resolve towards the vertex
/// that became ready earliest.
pub fn kahn_sort_with_metrics(
    graph: &Graph,
    metrics: &mut Metrics,
) -> Result<Vec<VertexId>, GraphError> {
    metrics.start_timer();

    let n = graph.vertex_count();
    let mut in_degree = graph.in_degrees();
    metrics.add(counters::EDGES_PROCESSED, graph.edge_count() as u64);

    let mut queue: VecDeque<VertexId> = (0..n).filter(|&v| in_degree[v] == 0).collect();
    let mut queue_operations = queue.len() as u64;
    let mut order = Vec::with_capacity(n);

    while let Some(vertex) = queue.pop_front() {
        queue_operations += 1;
        order.push(vertex);

        for edge in graph.out_edges(vertex) {
            in_degree[edge.to] -= 1;
            if in_degree[edge.to] == 0 {
                queue.push_back(edge.to);
                queue_operations += 1;
            }
        }
    }

    metrics.add(counters::QUEUE_OPERATIONS, queue_operations);
    metrics.stop_timer();

    if order.len() != n {
        log::debug!(
            "kahn: ordered {} of {} vertices, graph is cyclic",
            order.len(),
            n
        );
        return Err(GraphError::CycleDetected {
            ordered: order.len(),
            vertex_count: n,
        });
    }
    Ok(order)
}

/// Reversed DFS finish order.
///
/// Does **not** detect cycles: a cyclic graph yields an order that some edge
/// violates. Use [`kahn_sort`] when the input may be cyclic.
pub fn dfs_sort(graph: &Graph) -> Vec<VertexId> {
    let mut metrics = Metrics::new(TopoAlgorithm::Dfs.name());
    dfs_sort_with_metrics(graph, &mut metrics)
}

pub fn dfs_sort_with_metrics(graph: &Graph, metrics: &mut Metrics) -> Vec<VertexId> {
    metrics.start_timer();

    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut finished: Vec<VertexId> = Vec::with_capacity(n);
    // (vertex, next edge position)
    let mut call_stack: Vec<(VertexId, usize)> = Vec::new();
    let mut dfs_calls = 0u64;
    let mut edges_visited = 0u64;

    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        dfs_calls += 1;
        call_stack.push((start, 0));

        while let Some((vertex, next_edge)) = call_stack.last_mut() {
            let v = *vertex;
            if let Some(edge) = graph.out_edges(v).get(*next_edge) {
                *next_edge += 1;
                edges_visited += 1;
                if !visited[edge.to] {
                    visited[edge.to] = true;
                    dfs_calls += 1;
                    call_stack.push((edge.to, 0));
                }
            } else {
                call_stack.pop();
                finished.push(v);
            }
        }
    }

    metrics.add(counters::DFS_CALLS, dfs_calls);
    metrics.add(counters::EDGES_VISITED, edges_visited);
    metrics.add(counters::STACK_OPERATIONS, finished.len() as u64);
    metrics.stop_timer();

    finished.reverse();
    finished
}

/// True if `order` is a permutation of the graph's vertices in which every
/// edge `u → v` has `u` before `v`.
pub fn is_topological_order(graph: &Graph, order: &[VertexId]) -> bool {
    let n = graph.vertex_count();
    if order.len() != n {
        return false;
    }

    let mut position = vec![usize::MAX; n];
    for (pos, &vertex) in order.iter().enumerate() {
        if vertex >= n || position[vertex] != usize::MAX {
            return false;
        }
        position[vertex] = pos;
    }

    graph
        .edges()
        .all(|(from, edge)| position[from] < position[edge.to])
}
