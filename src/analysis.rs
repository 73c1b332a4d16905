//! The full pipeline over one graph: SCCs, condensation, an order of the
//! condensation, shortest paths from the source's component, and the critical
//! path mapped back onto original vertices.

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::error::GraphError;
use crate::graph::{Graph, VertexId};
use crate::metrics::Metrics;
use crate::paths::{CriticalPath, critical_path_with_metrics, shortest_paths_with_metrics};
use crate::scc::{Component, SccAlgorithm, build_condensation, component_ids, same_partition};
use crate::topo::TopoAlgorithm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalysisOptions {
    pub scc: SccAlgorithm,
    pub topo: TopoAlgorithm,
    pub source: VertexId,
    pub cross_check: bool,
}

impl From<&AnalysisConfig> for AnalysisOptions {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            scc: config.scc,
            topo: config.topo,
            source: config.source,
            cross_check: config.cross_check,
        }
    }
}

/// Everything [`analyze`] found. Indices into `components` double as vertex
/// ids of the condensation. Unreached distances serialize as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub directed: bool,
    pub components: Vec<Component>,
    /// Component index of every original vertex.
    pub component_of: Vec<usize>,
    pub condensation_edges: usize,
    pub topological_order: Vec<usize>,
    pub source_component: usize,
    pub shortest_distances: Vec<f64>,
    pub critical_path: CriticalPath,
    /// Components along the critical path, first to last.
    pub critical_components: Vec<usize>,
    /// Members of each component along the critical path.
    pub critical_members: Vec<Vec<VertexId>>,
    /// Set when cross-checking: whether both SCC algorithms agreed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partitions_agree: Option<bool>,
    pub metrics: Vec<Metrics>,
}

impl Analysis {
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// True if every component is a single vertex, i.e. the input was a DAG
    /// (ignoring self-loops).
    pub fn is_acyclic(&self) -> bool {
        self.components.iter().all(|c| c.len() == 1)
    }
}

/// Runs the pipeline. Fails if `options.source` is not a vertex of `graph`,
/// so an empty graph cannot be analyzed.
pub fn analyze(graph: &Graph, options: &AnalysisOptions) -> Result<Analysis, GraphError> {
    graph.check_vertex(options.source)?;
    let mut metrics = Vec::new();

    let (components, scc_metrics) = options.scc.run(graph);
    metrics.push(scc_metrics);

    let partitions_agree = if options.cross_check {
        let (other, other_metrics) = options.scc.counterpart().run(graph);
        metrics.push(other_metrics);
        let agree = same_partition(&components, &other);
        if !agree {
            log::warn!(
                "{} and {} disagree on the SCC partition",
                options.scc.name(),
                options.scc.counterpart().name()
            );
        }
        Some(agree)
    } else {
        None
    };

    let component_of = component_ids(graph.vertex_count(), &components)?;
    let condensation = build_condensation(graph, &components)?;

    let (order, topo_metrics) = options.topo.run(&condensation);
    let topological_order = order?;
    metrics.push(topo_metrics);

    let source_component = component_of[options.source];
    let mut shortest_metrics = Metrics::new("DAGShortestPath");
    let shortest_distances =
        shortest_paths_with_metrics(&condensation, source_component, &mut shortest_metrics)?;
    metrics.push(shortest_metrics);

    let mut longest_metrics = Metrics::new("DAGLongestPath");
    let critical_path = critical_path_with_metrics(&condensation, &mut longest_metrics);
    metrics.push(longest_metrics);

    let critical_components = critical_path.path(&condensation);
    let critical_members = critical_components
        .iter()
        .map(|&c| components[c].members.clone())
        .collect();

    log::debug!(
        "analysis: {} vertices in {} components, critical path length {}",
        graph.vertex_count(),
        components.len(),
        critical_path.length
    );

    Ok(Analysis {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        directed: graph.is_directed(),
        components,
        component_of,
        condensation_edges: condensation.edge_count(),
        topological_order,
        source_component,
        shortest_distances,
        critical_path,
        critical_components,
        critical_members,
        partitions_agree,
        metrics,
    })
}
