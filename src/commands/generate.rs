use anyhow::{Context, Result};
use std::path::Path;

use condensa::generator::GraphGenerator;

pub fn run(dir: &Path, seed: u64, json: bool) -> Result<()> {
    let written = GraphGenerator::new(seed)
        .write_datasets(dir)
        .with_context(|| format!("Failed to write datasets to {}", dir.display()))?;

    if json {
        let output = serde_json::json!({
            "seed": seed,
            "files": written,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "Generated {} datasets in {} (seed {})",
            written.len(),
            dir.display(),
            seed
        );
        for path in &written {
            println!("  {}", path.display());
        }
    }
    Ok(())
}
