//! JSON graph records.
//!
//! ```json
//! { "directed": true, "n": 3, "source": 0, "weight_model": "edge",
//!   "edges": [ { "u": 0, "v": 1, "w": 2.5 } ] }
//! ```
//!
//! `source` and `weight_model` are optional. An edge without `w` has weight 1.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::GraphError;
use crate::graph::{Graph, VertexId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub u: VertexId,
    pub v: VertexId,
    #[serde(default = "default_weight")]
    pub w: f64,
}

fn default_weight() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRecord {
    pub directed: bool,
    pub n: usize,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<VertexId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_model: Option<String>,
}

impl GraphRecord {
    /// Builds the graph, validating every edge.
    pub fn to_graph(&self) -> Result<Graph, GraphError> {
        Graph::from_edges(
            self.n,
            self.directed,
            self.edges.iter().map(|e| (e.u, e.v, e.w)),
        )
    }

    /// Captures `graph` as a record. Undirected edges are written once, as they
    /// were added, so loading the record rebuilds the same graph.
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            directed: graph.is_directed(),
            n: graph.vertex_count(),
            edges: graph
                .inserted_edges()
                .iter()
                .map(|e| EdgeRecord {
                    u: e.from,
                    v: e.to,
                    w: e.weight,
                })
                .collect(),
            source: None,
            weight_model: None,
        }
    }

    pub fn with_source(mut self, source: VertexId) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_weight_model(mut self, model: impl Into<String>) -> Self {
        self.weight_model = Some(model.into());
        self
    }
}

pub fn parse_graph(content: &str) -> Result<GraphRecord, GraphError> {
    Ok(serde_json::from_str(content)?)
}

/// Load a graph record from a JSON file.
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<GraphRecord, GraphError> {
    let content = fs::read_to_string(path.as_ref())?;
    parse_graph(&content)
}

/// Save a graph record as pretty JSON, creating parent directories as needed.
pub fn save_graph<P: AsRef<Path>>(record: &GraphRecord, path: P) -> Result<(), GraphError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(record)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal_record() {
        let record = parse_graph(
            r#"{"directed": true, "n": 2, "edges": [{"u": 0, "v": 1, "w": 3}]}"#,
        )
        .unwrap();
        assert!(record.directed);
        assert_eq!(record.n, 2);
        assert_eq!(record.edges, vec![EdgeRecord { u: 0, v: 1, w: 3.0 }]);
        assert_eq!(record.source, None);
        assert_eq!(record.weight_model, None);
    }

    #[test]
    fn test_missing_weight_defaults_to_one() {
        let record = parse_graph(r#"{"directed": false, "n": 2, "edges": [{"u": 1, "v": 0}]}"#)
            .unwrap();
        assert_eq!(record.edges[0].w, 1.0);
    }

    #[test]
    fn test_optional_fields() {
        let record = parse_graph(
            r#"{"directed": true, "n": 1, "edges": [], "source": 0, "weight_model": "edge"}"#,
        )
        .unwrap();
        assert_eq!(record.source, Some(0));
        assert_eq!(record.weight_model.as_deref(), Some("edge"));
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(matches!(parse_graph("{ not json"), Err(GraphError::Json(_))));
        assert!(matches!(parse_graph(r#"{"n": 2}"#), Err(GraphError::Json(_))));
    }

    #[test]
    fn test_to_graph_rejects_bad_vertex() {
        let record = parse_graph(
            r#"{"directed": true, "n": 2, "edges": [{"u": 0, "v": 2, "w": 1}]}"#,
        )
        .unwrap();
        assert!(matches!(
            record.to_graph(),
            Err(GraphError::VertexOutOfRange { vertex: 2, .. })
        ));
    }

    #[test]
    fn test_undirected_graph_survives_round_trip() {
        let graph = Graph::from_edges(3, false, [(0, 1, 2.0), (1, 2, 4.0), (2, 2, 1.0)]).unwrap();
        let record = GraphRecord::from_graph(&graph);
        assert_eq!(record.edges.len(), 3);
        assert_eq!(record.to_graph().unwrap(), graph);
    }

    #[test]
    fn test_save_creates_parent_dirs_and_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("g.json");
        let graph = Graph::from_edges(3, true, [(0, 1, 1.5), (1, 2, -2.0)]).unwrap();
        let record = GraphRecord::from_graph(&graph).with_source(1);

        save_graph(&record, &path).unwrap();
        let loaded = load_graph(&path).unwrap();
        assert_eq!(loaded, record);
        assert_eq!(loaded.to_graph().unwrap(), graph);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_graph(dir.path().join("absent.json")),
            Err(GraphError::Io(_))
        ));
    }
}
