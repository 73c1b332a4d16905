//! `condensa.toml` settings.
//!
//! ```toml
//! [analysis]
//! scc = "kosaraju"
//! topo = "kahn"
//! source = 0
//! cross_check = true
//!
//! [generator]
//! seed = 42
//! output_dir = "data"
//!
//! [log]
//! level = "info"
//! ```
//!
//! Every key is optional. Command-line flags win over the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::generator::DEFAULT_SEED;
use crate::graph::VertexId;
use crate::scc::SccAlgorithm;
use crate::topo::TopoAlgorithm;

pub const CONFIG_FILE: &str = "condensa.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub scc: SccAlgorithm,
    pub topo: TopoAlgorithm,
    /// Vertex of the original graph whose component seeds shortest paths.
    pub source: VertexId,
    /// Also run the other SCC algorithm and compare partitions.
    pub cross_check: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            scc: SccAlgorithm::default(),
            topo: TopoAlgorithm::default(),
            source: 0,
            cross_check: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub output_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            output_dir: PathBuf::from("data"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `env_logger` filter used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        Ok(config)
    }

    /// Load `condensa.toml` from `dir`, or defaults if it does not exist.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_default(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.analysis.scc, SccAlgorithm::Tarjan);
        assert_eq!(config.analysis.topo, TopoAlgorithm::Kahn);
        assert_eq!(config.generator.seed, 42);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "[analysis]\nscc = \"kosaraju\"\ncross_check = true\n",
        )
        .unwrap();

        let config = Config::load_or_default(dir.path()).unwrap();
        assert_eq!(config.analysis.scc, SccAlgorithm::Kosaraju);
        assert!(config.analysis.cross_check);
        assert_eq!(config.analysis.topo, TopoAlgorithm::Kahn);
        assert_eq!(config.generator, GeneratorConfig::default());
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_full_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            r#"
[analysis]
topo = "dfs"
source = 3

[generator]
seed = 7
output_dir = "out"

[log]
level = "debug"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.analysis.topo, TopoAlgorithm::Dfs);
        assert_eq!(config.analysis.source, 3);
        assert_eq!(config.generator.seed, 7);
        assert_eq!(config.generator.output_dir, PathBuf::from("out"));
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn test_invalid_value_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[analysis]\nscc = \"bogus\"\n").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }
}
