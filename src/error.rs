use thiserror::Error;

use crate::graph::VertexId;

/// Errors raised by graph construction, the analysis algorithms and the
/// JSON record collaborator.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex {vertex} is not in graph [0, {vertex_count})")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },
    #[error("edge {from} -> {to} has non-finite weight {weight}")]
    InvalidWeight {
        from: VertexId,
        to: VertexId,
        weight: f64,
    },
    #[error(
        "graph has cycles, cannot topologically sort ({ordered} of {vertex_count} vertices ordered)"
    )]
    CycleDetected { ordered: usize, vertex_count: usize },
    #[error("vertex {vertex} does not belong to any component")]
    MissingFromPartition { vertex: VertexId },
    #[error("vertex {vertex} belongs to more than one component")]
    DuplicateInPartition { vertex: VertexId },
    #[error("generator error: {0}")]
    Generator(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    pub fn is_cycle(&self) -> bool {
        matches!(self, GraphError::CycleDetected { .. })
    }
}
