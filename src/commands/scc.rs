use anyhow::Result;
use std::path::Path;

use condensa::scc::{Component, SccAlgorithm};

use super::format_members;

pub fn run(file: &Path, algorithm: SccAlgorithm, json: bool) -> Result<()> {
    let (graph, _record) = super::load_graph(file)?;
    let (components, metrics) = algorithm.run(&graph);

    if json {
        let output = serde_json::json!({
            "algorithm": algorithm.name(),
            "component_count": components.len(),
            "components": components,
            "metrics": metrics,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_human(&components, algorithm);
    }
    Ok(())
}

fn print_human(components: &[Component], algorithm: SccAlgorithm) {
    println!("{}: {} components", algorithm.name(), components.len());
    for (i, component) in components.iter().enumerate() {
        let label = if component.len() > 1 { " (cycle)" } else { "" };
        println!("  C{}: {}{}", i, format_members(&component.members), label);
    }
}
