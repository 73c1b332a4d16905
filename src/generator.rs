//! Seeded random graph generation and the standard benchmark datasets.
//!
//! All generated graphs are directed with integral weights. The same seed
//! always reproduces the same graphs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};

use crate::error::GraphError;
use crate::graph::Graph;
use crate::parser::{GraphRecord, save_graph};

pub const DEFAULT_SEED: u64 = 42;

/// Largest cycle planted by [`GraphGenerator::mixed_with_cycles`].
const MAX_PLANTED_CYCLE: usize = 5;

/// A named generated graph, as written to `<name>.json`.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub name: &'static str,
    pub record: GraphRecord,
}

pub struct GraphGenerator {
    rng: StdRng,
}

impl Default for GraphGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl GraphGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Eight vertices: the cycle 1 → 2 → 3 → 1 plus the chain 4 → 5 → 6 → 7,
    /// with cross edges from the cycle into the chain.
    pub fn assignment_example(&self) -> Result<Graph, GraphError> {
        Graph::from_edges(
            8,
            true,
            [
                (0, 1, 3.0),
                (1, 2, 2.0),
                (2, 3, 4.0),
                (3, 1, 1.0),
                (4, 5, 2.0),
                (5, 6, 5.0),
                (6, 7, 1.0),
                (0, 4, 2.0),
                (2, 5, 3.0),
                (3, 6, 4.0),
            ],
        )
    }

    /// A DAG whose edges all point from lower to higher index. Each forward
    /// pair gets an edge with probability `density`, weight in `1..=10`.
    pub fn pure_dag(&mut self, n: usize, density: f64) -> Result<Graph, GraphError> {
        check_density(density)?;
        let mut graph = Graph::new(n, true);
        for u in 0..n {
            for v in (u + 1)..n {
                if self.rng.random::<f64>() < density {
                    let weight = self.rng.random_range(1..=10u32) as f64;
                    graph.add_edge(u, v, weight)?;
                }
            }
        }
        Ok(graph)
    }

    /// `scc_count` dense blocks of consecutive vertices (the last block takes
    /// the remainder). Inside a block each ordered pair is joined with
    /// probability 0.7; each later block is linked from an earlier one with
    /// probability 0.5, so links only run forward.
    pub fn multi_scc(&mut self, n: usize, scc_count: usize) -> Result<Graph, GraphError> {
        if scc_count == 0 || scc_count > n {
            return Err(GraphError::Generator(format!(
                "cannot split {n} vertices into {scc_count} components"
            )));
        }

        let mut graph = Graph::new(n, true);
        let per_block = n / scc_count;

        for block in 0..scc_count {
            let start = block * per_block;
            let end = if block == scc_count - 1 {
                n
            } else {
                start + per_block
            };
            for i in start..end {
                for j in start..end {
                    if i != j && self.rng.random::<f64>() < 0.7 {
                        let weight = self.rng.random_range(1..=5u32) as f64;
                        graph.add_edge(i, j, weight)?;
                    }
                }
            }
        }

        for earlier in 0..scc_count {
            for later in (earlier + 1)..scc_count {
                if self.rng.random::<f64>() < 0.5 {
                    let u = earlier * per_block + self.rng.random_range(0..per_block);
                    let v = later * per_block + self.rng.random_range(0..per_block);
                    let weight = self.rng.random_range(1..=5u32) as f64;
                    graph.add_edge(u, v, weight)?;
                }
            }
        }

        Ok(graph)
    }

    /// Every ordered pair `u != v` is joined with probability `density`.
    pub fn mixed(&mut self, n: usize, density: f64) -> Result<Graph, GraphError> {
        check_density(density)?;
        let mut graph = Graph::new(n, true);
        self.add_random_edges(&mut graph, density)?;
        Ok(graph)
    }

    /// [`mixed`](Self::mixed) plus `cycle_count` planted cycles of 3 to 5
    /// consecutive vertices.
    pub fn mixed_with_cycles(
        &mut self,
        n: usize,
        density: f64,
        cycle_count: usize,
    ) -> Result<Graph, GraphError> {
        check_density(density)?;
        if cycle_count > 0 && n <= MAX_PLANTED_CYCLE {
            return Err(GraphError::Generator(format!(
                "planting cycles needs more than {MAX_PLANTED_CYCLE} vertices, got {n}"
            )));
        }

        let mut graph = Graph::new(n, true);
        self.add_random_edges(&mut graph, density)?;

        for _ in 0..cycle_count {
            let size = self.rng.random_range(3..=MAX_PLANTED_CYCLE);
            let start = self.rng.random_range(0..n - size);
            for j in 0..size {
                let weight = self.rng.random_range(1..=5u32) as f64;
                graph.add_edge(start + j, start + (j + 1) % size, weight)?;
            }
        }

        Ok(graph)
    }

    fn add_random_edges(&mut self, graph: &mut Graph, density: f64) -> Result<(), GraphError> {
        let n = graph.vertex_count();
        for u in 0..n {
            for v in 0..n {
                if u != v && self.rng.random::<f64>() < density {
                    let weight = self.rng.random_range(1..=10u32) as f64;
                    graph.add_edge(u, v, weight)?;
                }
            }
        }
        Ok(())
    }

    /// The nine benchmark datasets, small to large, all drawn from this
    /// generator's stream in order.
    pub fn standard_datasets(&mut self) -> Result<Vec<Dataset>, GraphError> {
        let graphs = [
            ("small_1", self.assignment_example()?),
            ("small_2", self.pure_dag(10, 0.4)?),
            ("small_3", self.multi_scc(12, 3)?),
            ("medium_1", self.multi_scc(20, 5)?),
            ("medium_2", self.pure_dag(25, 0.3)?),
            ("medium_3", self.mixed_with_cycles(30, 0.25, 2)?),
            ("large_1", self.pure_dag(50, 0.2)?),
            ("large_2", self.multi_scc(60, 8)?),
            ("large_3", self.mixed(70, 0.15)?),
        ];

        Ok(graphs
            .into_iter()
            .map(|(name, graph)| Dataset {
                name,
                record: GraphRecord::from_graph(&graph)
                    .with_source(0)
                    .with_weight_model("edge"),
            })
            .collect())
    }

    /// Generates the standard datasets and writes each to `dir/<name>.json`.
    pub fn write_datasets(&mut self, dir: &Path) -> Result<Vec<PathBuf>, GraphError> {
        let mut written = Vec::new();
        for dataset in self.standard_datasets()? {
            let path = dir.join(format!("{}.json", dataset.name));
            save_graph(&dataset.record, &path)?;
            log::info!("wrote {} ({} vertices)", path.display(), dataset.record.n);
            written.push(path);
        }
        Ok(written)
    }
}

fn check_density(density: f64) -> Result<(), GraphError> {
    if (0.0..=1.0).contains(&density) {
        Ok(())
    } else {
        let message = format!("density must be within [0, 1], got {density}");
        Err(GraphError::Generator(message))
    }
}
