use anyhow::{Context, Result};
use std::path::Path;

use condensa::graph::{Graph, VertexId};
use condensa::parser::GraphRecord;
use condensa::scc::{Component, SccAlgorithm, build_condensation, component_ids};

pub mod analyze;
pub mod critical;
pub mod generate;
pub mod scc;
pub mod shortest;
pub mod topo;

/// Load a graph file, keeping the record for its optional `source`.
pub fn load_graph(path: &Path) -> Result<(Graph, GraphRecord)> {
    let record = condensa::parser::load_graph(path)
        .with_context(|| format!("Failed to load graph: {}", path.display()))?;
    let graph = record
        .to_graph()
        .with_context(|| format!("Invalid graph: {}", path.display()))?;
    Ok((graph, record))
}

/// A graph collapsed to its SCCs.
pub struct Condensed {
    pub components: Vec<Component>,
    pub component_of: Vec<usize>,
    pub graph: Graph,
}

pub fn condense(graph: &Graph, algorithm: SccAlgorithm) -> Result<Condensed> {
    let (components, _) = algorithm.run(graph);
    let component_of = component_ids(graph.vertex_count(), &components)?;
    let graph = build_condensation(graph, &components)?;
    Ok(Condensed {
        components,
        component_of,
        graph,
    })
}

pub fn format_distance(distance: f64) -> String {
    if distance.is_finite() {
        format!("{}", distance)
    } else {
        "unreachable".to_string()
    }
}

pub fn format_members(members: &[VertexId]) -> String {
    let mut sorted = members.to_vec();
    sorted.sort_unstable();
    let parts: Vec<String> = sorted.iter().map(|v| v.to_string()).collect();
    format!("{{{}}}", parts.join(", "))
}

pub fn format_path(path: &[VertexId]) -> String {
    let parts: Vec<String> = path.iter().map(|v| v.to_string()).collect();
    parts.join(" -> ")
}
