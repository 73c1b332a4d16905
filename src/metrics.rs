//! Diagnostic counters and wall-clock timing for a single algorithm run.
//!
//! A `Metrics` value is created by the caller and passed into an algorithm, so
//! independent analyses never share counters. Nothing here influences results.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Counter names used by the algorithms in this crate.
pub mod counters {
    pub const DFS_CALLS: &str = "dfs_calls";
    pub const EDGES_VISITED: &str = "edges_visited";
    pub const SCCS_FOUND: &str = "sccs_found";
    pub const EDGES_PROCESSED: &str = "edges_processed";
    pub const QUEUE_OPERATIONS: &str = "queue_operations";
    pub const STACK_OPERATIONS: &str = "stack_operations";
    pub const VERTICES_PROCESSED: &str = "vertices_processed";
    pub const EDGES_RELAXED: &str = "edges_relaxed";
    pub const DISTANCE_UPDATES: &str = "distance_updates";
}

#[derive(Debug, Clone, Serialize)]
pub struct Metrics {
    algorithm: &'static str,
    #[serde(rename = "time_ms", serialize_with = "serialize_millis")]
    elapsed: Duration,
    counters: BTreeMap<&'static str, u64>,
    #[serde(skip)]
    started: Option<Instant>,
}

impl Metrics {
    pub fn new(algorithm: &'static str) -> Self {
        Self {
            algorithm,
            elapsed: Duration::ZERO,
            counters: BTreeMap::new(),
            started: None,
        }
    }

    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    pub fn start_timer(&mut self) {
        self.started = Some(Instant::now());
    }

    /// Stops the running timer. Does nothing if the timer was never started.
    pub fn stop_timer(&mut self) {
        if let Some(started) = self.started.take() {
            self.elapsed = started.elapsed();
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    pub fn increment(&mut self, name: &'static str) {
        self.add(name, 1);
    }

    pub fn add(&mut self, name: &'static str, amount: u64) {
        *self.counters.entry(name).or_insert(0) += amount;
    }

    pub fn set(&mut self, name: &'static str, value: u64) {
        self.counters.insert(name, value);
    }

    /// Current value of a counter; zero if it was never touched.
    pub fn counter(&self, name: &str) -> u64 {
        self.counters.get(name).copied().unwrap_or(0)
    }

    pub fn counters(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        self.counters.iter().map(|(name, value)| (*name, *value))
    }
}

fn serialize_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_counter_is_zero() {
        let metrics = Metrics::new("test");
        assert_eq!(metrics.counter(counters::DFS_CALLS), 0);
        assert_eq!(metrics.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_increment_add_set() {
        let mut metrics = Metrics::new("test");
        metrics.increment(counters::DFS_CALLS);
        metrics.increment(counters::DFS_CALLS);
        metrics.add(counters::EDGES_VISITED, 5);
        metrics.set(counters::SCCS_FOUND, 3);
        metrics.set(counters::SCCS_FOUND, 4);
        assert_eq!(metrics.counter("dfs_calls"), 2);
        assert_eq!(metrics.counter("edges_visited"), 5);
        assert_eq!(metrics.counter("sccs_found"), 4);
    }

    #[test]
    fn test_stop_without_start_keeps_zero() {
        let mut metrics = Metrics::new("test");
        metrics.stop_timer();
        assert_eq!(metrics.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_serialization_shape() {
        let mut metrics = Metrics::new("Tarjan");
        metrics.add(counters::EDGES_VISITED, 7);
        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["algorithm"], "Tarjan");
        assert_eq!(json["counters"]["edges_visited"], 7);
        assert!(json["time_ms"].is_number());
        assert!(json.get("started").is_none());
    }
}
