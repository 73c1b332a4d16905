use crate::error::GraphError;
use crate::graph::{Graph, VertexId};
use crate::metrics::{Metrics, counters};
use crate::topo::kahn_sort;

/// Absolute tolerance when matching `dist[p] + w` against `dist[v]` during
/// path reconstruction.
pub const RECONSTRUCTION_TOLERANCE: f64 = 1e-9;

/// Shortest distance from `source` to every vertex of an acyclic `graph`.
///
/// Unreachable vertices keep `f64::INFINITY`. Fails if `source` is out of
/// range or if the graph has a cycle.
pub fn shortest_paths(graph: &Graph, source: VertexId) -> Result<Vec<f64>, GraphError> {
    let mut metrics = Metrics::new("DAGShortestPath");
    shortest_paths_with_metrics(graph, source, &mut metrics)
}

pub fn shortest_paths_with_metrics(
    graph: &Graph,
    source: VertexId,
    metrics: &mut Metrics,
) -> Result<Vec<f64>, GraphError> {
    graph.check_vertex(source)?;
    metrics.start_timer();

    let order = match kahn_sort(graph) {
        Ok(order) => order,
        Err(err) => {
            metrics.stop_timer();
            return Err(err);
        }
    };

    let mut dist = vec![f64::INFINITY; graph.vertex_count()];
    dist[source] = 0.0;
    let mut edges_relaxed = 0u64;
    let mut distance_updates = 0u64;

    for &u in &order {
        if dist[u] == f64::INFINITY {
            continue;
        }
        for edge in graph.out_edges(u) {
            edges_relaxed += 1;
            let candidate = dist[u] + edge.weight;
            if candidate < dist[edge.to] {
                dist[edge.to] = candidate;
                distance_updates += 1;
            }
        }
    }

    metrics.add(counters::VERTICES_PROCESSED, order.len() as u64);
    metrics.add(counters::EDGES_RELAXED, edges_relaxed);
    metrics.add(counters::DISTANCE_UPDATES, distance_updates);
    metrics.stop_timer();

    Ok(dist)
}

/// Recovers one shortest path `source → … → target` from a distance array.
///
/// Walks backwards from `target`, each step taking the first edge `(p, cur)`
/// (lowest `p`, then insertion order) with `dist[p] + w == dist[cur]` within
/// [`RECONSTRUCTION_TOLERANCE`]. The search is O(V·E) per call.
///
/// Returns an empty path if `target` is unreached, if no predecessor satisfies
/// the equality (the distances do not belong to this graph and source), or if
/// the indices or array length don't match the graph.
pub fn reconstruct_shortest_path(
    graph: &Graph,
    source: VertexId,
    target: VertexId,
    distances: &[f64],
) -> Vec<VertexId> {
    let n = graph.vertex_count();
    if source >= n || target >= n || distances.len() != n || !distances[target].is_finite() {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut current = target;
    while current != source {
        // A consistent predecessor chain in a DAG never repeats a vertex.
        if path.len() > n {
            return Vec::new();
        }

        let predecessor = graph.edges().find_map(|(from, edge)| {
            let matches = edge.to == current
                && distances[from].is_finite()
                && (distances[from] + edge.weight - distances[current]).abs()
                    < RECONSTRUCTION_TOLERANCE;
            matches.then_some(from)
        });

        match predecessor {
            Some(p) => {
                path.push(p);
                current = p;
            }
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}
