//! Strongly connected components and the condensation DAG.
//!
//! Two interchangeable decompositions are provided:
//!
//! 1. **Tarjan** ([`tarjan`]): one DFS with low-link values. Components come
//!    out in reverse topological order of the condensation.
//! 2. **Kosaraju** ([`kosaraju`]): a finish-order DFS, then a DFS over the
//!    transpose. Same partition, different component order.
//!
//! Both walk the graph with explicit frame stacks, so path depth is bounded by
//! memory rather than by the native call stack. Callers must not rely on the
//! order of the returned list, only on each entry being one SCC.

use serde::{Deserialize, Serialize};

use crate::error::GraphError;
use crate::graph::{Graph, VertexId};
use crate::metrics::Metrics;

pub mod kosaraju;
pub mod tarjan;

pub use kosaraju::{kosaraju_scc, kosaraju_scc_with_metrics};
pub use tarjan::{tarjan_scc, tarjan_scc_with_metrics};

/// A strongly connected component: a maximal set of mutually reachable
/// vertices, in the order the producing algorithm collected them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub members: Vec<VertexId>,
}

impl Component {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.members.contains(&vertex)
    }
}

/// Which SCC decomposition to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SccAlgorithm {
    #[default]
    Tarjan,
    Kosaraju,
}

impl SccAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            SccAlgorithm::Tarjan => "TarjanSCC",
            SccAlgorithm::Kosaraju => "KosarajuSCC",
        }
    }

    /// The other algorithm, used for cross-checking a decomposition.
    pub fn counterpart(self) -> SccAlgorithm {
        match self {
            SccAlgorithm::Tarjan => SccAlgorithm::Kosaraju,
            SccAlgorithm::Kosaraju => SccAlgorithm::Tarjan,
        }
    }

    pub fn compute_sccs(self, graph: &Graph, metrics: &mut Metrics) -> Vec<Component> {
        match self {
            SccAlgorithm::Tarjan => tarjan_scc_with_metrics(graph, metrics),
            SccAlgorithm::Kosaraju => kosaraju_scc_with_metrics(graph, metrics),
        }
    }

    /// Runs the algorithm with a fresh, named `Metrics`.
    pub fn run(self, graph: &Graph) -> (Vec<Component>, Metrics) {
        let mut metrics = Metrics::new(self.name());
        let components = self.compute_sccs(graph, &mut metrics);
        (components, metrics)
    }
}

impl std::fmt::Display for SccAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SccAlgorithm::Tarjan => write!(f, "tarjan"),
            SccAlgorithm::Kosaraju => write!(f, "kosaraju"),
        }
    }
}

/// Maps every vertex to the index of its component in `components`.
///
/// Fails if `components` is not a partition of `[0, vertex_count)`: a member out
/// of range, a vertex listed twice, or a vertex listed nowhere.
pub fn component_ids(
    vertex_count: usize,
    components: &[Component],
) -> Result<Vec<usize>, GraphError> {
    let mut ids: Vec<Option<usize>> = vec![None; vertex_count];
    for (component_id, component) in components.iter().enumerate() {
        for &vertex in &component.members {
            let slot = ids.get_mut(vertex).ok_or(GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
            })?;
            if slot.is_some() {
                return Err(GraphError::DuplicateInPartition { vertex });
            }
            *slot = Some(component_id);
        }
    }

    ids.into_iter()
        .enumerate()
        .map(|(vertex, id)| id.ok_or(GraphError::MissingFromPartition { vertex }))
        .collect()
}

/// Contracts each component of `graph` to a single vertex.
///
/// Vertex `i` of the result is `components[i]`. Every original edge whose
/// endpoints lie in different components becomes one condensation edge with
/// the same weight; parallel edges are kept, intra-component edges dropped.
/// The result is always directed.
pub fn build_condensation(graph: &Graph, components: &[Component]) -> Result<Graph, GraphError> {
    let ids = component_ids(graph.vertex_count(), components)?;
    let mut condensation = Graph::new(components.len(), true);

    for (from, edge) in graph.edges() {
        let (cu, cv) = (ids[from], ids[edge.to]);
        if cu != cv {
            condensation.add_edge(cu, cv, edge.weight)?;
        }
    }

    log::debug!(
        "condensation: {} vertices -> {} components, {} edges",
        graph.vertex_count(),
        condensation.vertex_count(),
        condensation.edge_count()
    );
    Ok(condensation)
}

/// True if both lists describe the same partition, ignoring the order of
/// components and of members within a component.
pub fn same_partition(a: &[Component], b: &[Component]) -> bool {
    fn normalized(components: &[Component]) -> Vec<Vec<VertexId>> {
        let mut sets: Vec<Vec<VertexId>> = components
            .iter()
            .map(|c| {
                let mut members = c.members.clone();
                members.sort_unstable();
                members
            })
            .collect();
        sets.sort();
        sets
    }

    a.len() == b.len() && normalized(a) == normalized(b)
}
