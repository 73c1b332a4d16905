use anyhow::{Result, bail};
use std::path::Path;

use condensa::config::Config;
use condensa::graph::VertexId;
use condensa::metrics::Metrics;
use condensa::paths::{reconstruct_shortest_path, shortest_paths_with_metrics};
use condensa::scc::SccAlgorithm;

use super::{format_distance, format_path};

/// Shortest distances from `source`. With `condense` both `source` and
/// `target` are original vertices and are replaced by their components.
pub fn run(
    file: &Path,
    source: Option<VertexId>,
    target: Option<VertexId>,
    condense: Option<SccAlgorithm>,
    config: &Config,
    json: bool,
) -> Result<()> {
    let (graph, record) = super::load_graph(file)?;
    let source = source.or(record.source).unwrap_or(config.analysis.source);
    if let Some(target) = target.filter(|&t| t >= graph.vertex_count()) {
        bail!(
            "target {} is not a vertex of {} ({} vertices)",
            target,
            file.display(),
            graph.vertex_count()
        );
    }
    graph.check_vertex(source)?;

    let condensed = condense.map(|s| super::condense(&graph, s)).transpose()?;
    let (dag, from, to) = match &condensed {
        Some(c) => {
            let to = target.map(|t| c.component_of[t]);
            (&c.graph, c.component_of[source], to)
        }
        None => (&graph, source, target),
    };

    let mut metrics = Metrics::new("DAGShortestPath");
    let distances = shortest_paths_with_metrics(dag, from, &mut metrics)?;
    let path = to.map(|to| reconstruct_shortest_path(dag, from, to, &distances));

    if json {
        let output = serde_json::json!({
            "source": from,
            "target": to,
            "condensed": condensed.is_some(),
            "distances": distances,
            "path": path,
            "metrics": metrics,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let label = if condensed.is_some() { "C" } else { "" };
    println!("Shortest distances from {}{}:", label, from);
    for (vertex, distance) in distances.iter().enumerate() {
        println!("  {}{}: {}", label, vertex, format_distance(*distance));
    }
    if let (Some(to), Some(path)) = (to, path) {
        if path.is_empty() {
            println!("\nNo path from {}{} to {}{}", label, from, label, to);
        } else {
            println!(
                "\nPath to {}{} (cost {}): {}",
                label,
                to,
                distances[to],
                format_path(&path)
            );
        }
    }
    Ok(())
}
