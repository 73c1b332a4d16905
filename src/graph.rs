//! Weighted adjacency-list graph shared by every algorithm in the crate.
//!
//! Vertices are dense indices in `[0, n)`. Edges are kept per source vertex in
//! insertion order; that order decides which neighbor a traversal visits first,
//! and so which of several valid answers an algorithm reports.
//!
//! Graphs are built once and then only read. No algorithm mutates its input.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::error::GraphError;

/// A vertex identifier: an index in `[0, vertex_count)`.
pub type VertexId = usize;

/// An outgoing edge. The tail is implied by the adjacency slot it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub to: VertexId,
    pub weight: f64,
}

/// An `add_edge` call as the caller made it, before undirected mirroring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsertedEdge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    directed: bool,
    adj: Vec<Vec<Edge>>,
    inserted: Vec<InsertedEdge>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize, directed: bool) -> Self {
        Self {
            directed,
            adj: vec![Vec::new(); vertex_count],
            inserted: Vec::new(),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, stopping at the first
    /// invalid edge.
    pub fn from_edges<I>(vertex_count: usize, directed: bool, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (VertexId, VertexId, f64)>,
    {
        let mut graph = Self::new(vertex_count, directed);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of stored adjacency entries. An undirected edge between two
    /// distinct vertices counts twice.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Adds the edge `from → to`. For undirected graphs the reverse entry is
    /// stored as well, except for self-loops which are stored once.
    ///
    /// Fails without modifying the graph if either endpoint is out of range or
    /// the weight is not finite.
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: f64,
    ) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if !weight.is_finite() {
            return Err(GraphError::InvalidWeight { from, to, weight });
        }

        self.adj[from].push(Edge { to, weight });
        if !self.directed && from != to {
            self.adj[to].push(Edge { to: from, weight });
        }
        self.inserted.push(InsertedEdge { from, to, weight });
        Ok(())
    }

    /// Outgoing edges of `vertex` in insertion order.
    pub fn neighbors(&self, vertex: VertexId) -> Result<&[Edge], GraphError> {
        self.check_vertex(vertex)?;
        Ok(&self.adj[vertex])
    }

    /// Unchecked variant of [`Graph::neighbors`] for algorithm inner loops,
    /// which only ever pass indices below `vertex_count`.
    pub(crate) fn out_edges(&self, vertex: VertexId) -> &[Edge] {
        &self.adj[vertex]
    }

    /// Every stored adjacency entry as `(tail, edge)`, tails in increasing order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, &Edge)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| edges.iter().map(move |edge| (from, edge)))
    }

    /// The edges in the order they were added, one entry per `add_edge` call.
    pub fn inserted_edges(&self) -> &[InsertedEdge] {
        &self.inserted
    }

    pub fn in_degrees(&self) -> Vec<usize> {
        let mut in_degree = vec![0; self.vertex_count()];
        for (_, edge) in self.edges() {
            in_degree[edge.to] += 1;
        }
        in_degree
    }

    /// Returns the graph with every edge reversed.
    ///
    /// An undirected graph is its own transpose and is returned borrowed.
    /// For a directed graph the reversed edges are added scanning tails in
    /// increasing order, so `transpose()[v]` lists its heads by ascending tail.
    pub fn transpose(&self) -> Cow<'_, Graph> {
        if !self.directed {
            return Cow::Borrowed(self);
        }

        let mut transposed = Graph::new(self.vertex_count(), true);
        for (from, edge) in self.edges() {
            transposed.adj[edge.to].push(Edge {
                to: from,
                weight: edge.weight,
            });
            transposed.inserted.push(InsertedEdge {
                from: edge.to,
                to: from,
                weight: edge.weight,
            });
        }
        Cow::Owned(transposed)
    }

    /// `Ok` if `vertex` is in `[0, vertex_count)`.
    pub fn check_vertex(&self, vertex: VertexId) -> Result<(), GraphError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph(n={}, directed={})",
            self.vertex_count(),
            self.directed
        )?;
        for (vertex, edges) in self.adj.iter().enumerate() {
            write!(f, "{vertex}:")?;
            for edge in edges {
                write!(f, " ->{}({})", edge.to, edge.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
