use anyhow::Result;
use std::path::Path;

use condensa::scc::SccAlgorithm;
use condensa::topo::TopoAlgorithm;

/// Orders the graph, or its condensation when `condense` names an SCC
/// algorithm. A cyclic graph is an error whichever algorithm is chosen.
pub fn run(
    file: &Path,
    algorithm: TopoAlgorithm,
    condense: Option<SccAlgorithm>,
    json: bool,
) -> Result<()> {
    let (graph, _record) = super::load_graph(file)?;
    let condensed = condense.map(|s| super::condense(&graph, s)).transpose()?;
    let target = condensed.as_ref().map_or(&graph, |c| &c.graph);

    // DFS would silently return an invalid order.
    if !algorithm.detects_cycles() && condensed.is_none() {
        condensa::topo::topological_sort(target)?;
    }

    let (order, metrics) = algorithm.run(target);
    let order = order?;

    if json {
        let components = condensed.as_ref().map(|c| &c.components);
        let output = serde_json::json!({
            "algorithm": algorithm.name(),
            "condensed": condensed.is_some(),
            "order": order,
            "components": components,
            "metrics": metrics,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match &condensed {
        Some(condensed) => {
            println!("{} over {} components:", algorithm.name(), order.len());
            for component in &order {
                println!(
                    "  C{}: {}",
                    component,
                    super::format_members(&condensed.components[*component].members)
                );
            }
        }
        None => {
            println!("{}: {}", algorithm.name(), super::format_path(&order));
        }
    }
    Ok(())
}
