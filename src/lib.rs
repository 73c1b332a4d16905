pub mod analysis;
pub mod config;
pub mod error;
pub mod generator;
pub mod graph;
pub mod metrics;
pub mod parser;
pub mod paths;
pub mod scc;
pub mod topo;

pub use analysis::{Analysis, AnalysisOptions, analyze};
pub use config::Config;
pub use error::GraphError;
pub use generator::GraphGenerator;
pub use graph::{Edge, Graph, VertexId};
pub use metrics::Metrics;
pub use parser::{GraphRecord, load_graph, parse_graph, save_graph};
pub use paths::{CriticalPath, critical_path, reconstruct_shortest_path, shortest_paths};
pub use scc::{Component, SccAlgorithm, build_condensation, kosaraju_scc, tarjan_scc};
pub use topo::{TopoAlgorithm, topological_sort};
