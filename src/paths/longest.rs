use serde::Serialize;

use crate::error::GraphError;
use crate::graph::{Graph, VertexId};
use crate::metrics::{Metrics, counters};
use crate::topo::kahn_sort;

/// The heaviest path found in a DAG, identified by its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriticalPath {
    /// Total weight; `-∞` when no path was found.
    pub length: f64,
    pub start: Option<VertexId>,
    pub end: Option<VertexId>,
}

impl CriticalPath {
    /// Returned for cyclic and empty graphs.
    pub const NONE: CriticalPath = CriticalPath {
        length: f64::NEG_INFINITY,
        start: None,
        end: None,
    };

    pub fn is_found(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// The vertices of this path, or empty for [`CriticalPath::NONE`].
    pub fn path(&self, graph: &Graph) -> Vec<VertexId> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => reconstruct_longest_path(graph, start, end),
            _ => Vec::new(),
        }
    }
}

/// Single-source longest distances with the predecessor that set each one.
#[derive(Debug, Clone, PartialEq)]
pub struct LongestPaths {
    pub distances: Vec<f64>,
    pub predecessors: Vec<Option<VertexId>>,
}

#[derive(Default)]
struct Tally {
    vertices_processed: u64,
    edges_relaxed: u64,
    distance_updates: u64,
}

/// Relaxes `dist` (already seeded) in `order`, keeping the larger value.
fn relax_longest(
    graph: &Graph,
    order: &[VertexId],
    dist: &mut [f64],
    mut predecessors: Option<&mut [Option<VertexId>]>,
    tally: &mut Tally,
) {
    for &u in order {
        tally.vertices_processed += 1;
        if dist[u] == f64::NEG_INFINITY {
            continue;
        }
        for edge in graph.out_edges(u) {
            tally.edges_relaxed += 1;
            let candidate = dist[u] + edge.weight;
            if candidate > dist[edge.to] {
                dist[edge.to] = candidate;
                if let Some(prev) = predecessors.as_deref_mut() {
                    prev[edge.to] = Some(u);
                }
                tally.distance_updates += 1;
            }
        }
    }
}

/// Finds the critical path of an acyclic `graph`.
///
/// Every vertex is tried as a source in increasing order; the best path
/// replaces the current one only if strictly heavier, so on ties the lowest
/// source and then the lowest end vertex win. A single vertex is a path of
/// length 0, so any non-empty DAG has a result. O(V·(V+E)).
///
/// Cyclic and empty graphs yield [`CriticalPath::NONE`] rather than an error.
pub fn critical_path(graph: &Graph) -> CriticalPath {
    let mut metrics = Metrics::new("DAGLongestPath");
    critical_path_with_metrics(graph, &mut metrics)
}

pub fn critical_path_with_metrics(graph: &Graph, metrics: &mut Metrics) -> CriticalPath {
    metrics.start_timer();

    let order = match kahn_sort(graph) {
        Ok(order) => order,
        Err(err) => {
            log::warn!("critical path not computed: {err}");
            metrics.stop_timer();
            return CriticalPath::NONE;
        }
    };

    let n = graph.vertex_count();
    let mut best = CriticalPath::NONE;
    let mut dist = vec![f64::NEG_INFINITY; n];
    let mut tally = Tally::default();

    for source in 0..n {
        dist.fill(f64::NEG_INFINITY);
        dist[source] = 0.0;
        relax_longest(graph, &order, &mut dist, None, &mut tally);

        for (end, &d) in dist.iter().enumerate() {
            if d != f64::NEG_INFINITY && d > best.length {
                best = CriticalPath {
                    length: d,
                    start: Some(source),
                    end: Some(end),
                };
            }
        }
    }

    metrics.add(counters::VERTICES_PROCESSED, tally.vertices_processed);
    metrics.add(counters::EDGES_RELAXED, tally.edges_relaxed);
    metrics.add(counters::DISTANCE_UPDATES, tally.distance_updates);
    metrics.stop_timer();
    log::debug!(
        "critical path: length {} from {:?} to {:?}",
        best.length,
        best.start,
        best.end
    );

    best
}

/// Longest distance from `source` to every vertex, `-∞` where unreachable.
pub fn longest_paths(graph: &Graph, source: VertexId) -> Result<LongestPaths, GraphError> {
    graph.check_vertex(source)?;
    let order = kahn_sort(graph)?;

    let n = graph.vertex_count();
    let mut distances = vec![f64::NEG_INFINITY; n];
    let mut predecessors = vec![None; n];
    distances[source] = 0.0;
    relax_longest(
        graph,
        &order,
        &mut distances,
        Some(&mut predecessors),
        &mut Tally::default(),
    );

    Ok(LongestPaths {
        distances,
        predecessors,
    })
}

/// Recovers the longest path `start → … → end` by one relaxation pass from
/// `start` and a walk back along predecessors.
///
/// Empty if either index is out of range, the graph is cyclic, or `end` is not
/// reachable from `start`.
pub fn reconstruct_longest_path(graph: &Graph, start: VertexId, end: VertexId) -> Vec<VertexId> {
    if end >= graph.vertex_count() {
        return Vec::new();
    }
    let Ok(longest) = longest_paths(graph, start) else {
        return Vec::new();
    };

    let mut path = Vec::new();
    let mut at = Some(end);
    while let Some(vertex) = at {
        if path.len() > graph.vertex_count() {
            return Vec::new();
        }
        path.push(vertex);
        at = longest.predecessors[vertex];
    }
    path.reverse();

    if path.first() != Some(&start) {
        return Vec::new();
    }
    path
}
