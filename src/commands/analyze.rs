use anyhow::Result;
use std::path::Path;

use condensa::analysis::{Analysis, AnalysisOptions, analyze};

use super::{format_distance, format_members};

pub fn run(file: &Path, options: &AnalysisOptions, json: bool) -> Result<()> {
    let (graph, _record) = super::load_graph(file)?;
    let analysis = analyze(&graph, options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_human(&analysis, options);
    }
    Ok(())
}

fn print_human(analysis: &Analysis, options: &AnalysisOptions) {
    let kind = if analysis.directed {
        "directed"
    } else {
        "undirected"
    };
    println!(
        "Graph: {} vertices, {} edges ({})",
        analysis.vertex_count, analysis.edge_count, kind
    );

    println!(
        "\nStrongly connected components: {}",
        analysis.component_count()
    );
    for (i, component) in analysis.components.iter().enumerate() {
        println!("  C{}: {}", i, format_members(&component.members));
    }
    if let Some(agree) = analysis.partitions_agree {
        let verdict = if agree { "agree" } else { "DISAGREE" };
        println!(
            "  {} and {} {}",
            options.scc.name(),
            options.scc.counterpart().name(),
            verdict
        );
    }

    println!(
        "\nCondensation: {} components, {} edges",
        analysis.component_count(),
        analysis.condensation_edges
    );
    let order: Vec<String> = analysis
        .topological_order
        .iter()
        .map(|c| format!("C{}", c))
        .collect();
    println!(
        "  Topological order ({}): {}",
        options.topo,
        order.join(", ")
    );

    println!(
        "\nShortest distances from vertex {} (C{}):",
        options.source, analysis.source_component
    );
    for (component, distance) in analysis.shortest_distances.iter().enumerate() {
        println!("  C{}: {}", component, format_distance(*distance));
    }

    println!();
    if analysis.critical_path.is_found() {
        let path: Vec<String> = analysis
            .critical_components
            .iter()
            .map(|c| format!("C{}", c))
            .collect();
        println!(
            "Critical path (length {}): {}",
            analysis.critical_path.length,
            path.join(" -> ")
        );
        let steps = analysis
            .critical_components
            .iter()
            .zip(&analysis.critical_members);
        for (component, members) in steps {
            println!("  C{}: {}", component, format_members(members));
        }
    } else {
        println!("Critical path: none");
    }

    println!("\nMetrics:");
    for metrics in &analysis.metrics {
        let counters: Vec<String> = metrics
            .counters()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        println!(
            "  {:<22} {:>9.3} ms  {}",
            metrics.algorithm(),
            metrics.elapsed_ms(),
            counters.join(" ")
        );
    }
}
