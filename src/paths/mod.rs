//! Single-source shortest paths and critical (longest) paths over DAGs.
//!
//! Both relax edges while walking vertices in Kahn topological order, so every
//! distance is final before it is used and negative weights are fine. Neither
//! handles cyclic graphs: shortest paths propagate the cycle error, the
//! critical-path search reports [`CriticalPath::NONE`].

pub mod longest;
pub mod shortest;

pub use longest::{
    CriticalPath, LongestPaths, critical_path, critical_path_with_metrics, longest_paths,
    reconstruct_longest_path,
};
pub use shortest::{
    RECONSTRUCTION_TOLERANCE, reconstruct_shortest_path, shortest_paths,
    shortest_paths_with_metrics,
};
