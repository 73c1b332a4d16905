use anyhow::Result;
use std::path::Path;

use condensa::metrics::Metrics;
use condensa::paths::critical_path_with_metrics;
use condensa::scc::SccAlgorithm;

use super::{format_members, format_path};

/// Prints the critical path. A cyclic graph without `condense` has no
/// critical path, which is reported rather than treated as an error.
pub fn run(file: &Path, condense: Option<SccAlgorithm>, json: bool) -> Result<()> {
    let (graph, _record) = super::load_graph(file)?;
    let condensed = condense.map(|s| super::condense(&graph, s)).transpose()?;
    let dag = condensed.as_ref().map_or(&graph, |c| &c.graph);

    let mut metrics = Metrics::new("DAGLongestPath");
    let critical = critical_path_with_metrics(dag, &mut metrics);
    let path = critical.path(dag);
    let members: Option<Vec<Vec<usize>>> = condensed.as_ref().map(|c| {
        path.iter()
            .map(|&component| c.components[component].members.clone())
            .collect()
    });

    if json {
        let output = serde_json::json!({
            "condensed": condensed.is_some(),
            "found": critical.is_found(),
            "length": critical.length,
            "start": critical.start,
            "end": critical.end,
            "path": path,
            "members": members,
            "metrics": metrics,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if !critical.is_found() {
        println!("No critical path (graph is empty or has cycles; try --condense)");
        return Ok(());
    }

    println!("Critical path length: {}", critical.length);
    println!("  {}", format_path(&path));
    if let Some(members) = members {
        for (component, members) in path.iter().zip(&members) {
            println!("  C{}: {}", component, format_members(members));
        }
    }
    Ok(())
}
