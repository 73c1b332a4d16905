//! Integration tests exercising the `condensa` binary end-to-end.

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::TempDir;

use condensa::graph::Graph;
use condensa::parser::{GraphRecord, save_graph};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Runs the binary with `dir` as working directory, so only a
/// `condensa.toml` placed there is picked up.
fn condensa_cmd(dir: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_condensa"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .unwrap_or_else(|e| panic!("Failed to run condensa {:?}: {}", args, e))
}

fn condensa_ok(dir: &Path, args: &[&str]) -> String {
    let output = condensa_cmd(dir, args);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    assert!(
        output.status.success(),
        "condensa {:?} failed.\nstdout: {}\nstderr: {}",
        args,
        stdout,
        stderr
    );
    stdout
}

fn condensa_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let mut full = vec!["--json"];
    full.extend_from_slice(args);
    let stdout = condensa_ok(dir, &full);
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("bad JSON ({}): {}", e, stdout))
}

/// Saves `graph` under `dir` and returns the path as a command-line argument.
fn write_graph(dir: &Path, name: &str, graph: &Graph) -> String {
    let path = dir.join(name);
    save_graph(&GraphRecord::from_graph(graph), &path).unwrap();
    path.to_str().unwrap().to_string()
}

/// 0 → {1, 2, 3} → 4, with the three-cycle in the middle.
fn cyclic_graph() -> Graph {
    Graph::from_edges(
        5,
        true,
        [
            (0, 1, 2.0),
            (1, 2, 1.0),
            (2, 3, 1.0),
            (3, 1, 1.0),
            (3, 4, 5.0),
        ],
    )
    .unwrap()
}

fn dag() -> Graph {
    Graph::from_edges(
        4,
        true,
        [
            (0, 1, 1.0),
            (0, 2, 4.0),
            (1, 2, 2.0),
            (1, 3, 6.0),
            (2, 3, 3.0),
        ],
    )
    .unwrap()
}

// ---------------------------------------------------------------------------
// scc / topo
// ---------------------------------------------------------------------------

#[test]
fn test_scc_lists_components() {
    let tmp = TempDir::new().unwrap();
    let file = write_graph(tmp.path(), "g.json", &cyclic_graph());

    let stdout = condensa_ok(tmp.path(), &["scc", &file]);
    assert!(stdout.contains("TarjanSCC: 3 components"), "{}", stdout);
    assert!(stdout.contains("{1, 2, 3} (cycle)"), "{}", stdout);

    let json = condensa_json(tmp.path(), &["scc", &file, "--algorithm", "kosaraju"]);
    assert_eq!(json["algorithm"], "KosarajuSCC");
    assert_eq!(json["component_count"], 3);
}

#[test]
fn test_topo_fails_on_cycle_without_condense() {
    let tmp = TempDir::new().unwrap();
    let file = write_graph(tmp.path(), "g.json", &cyclic_graph());

    let output = condensa_cmd(tmp.path(), &["topo", &file]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("graph has cycles"), "{}", stderr);
}

#[test]
fn test_topo_dfs_fails_on_cycle_without_condense() {
    let tmp = TempDir::new().unwrap();
    let file = write_graph(tmp.path(), "g.json", &cyclic_graph());

    let output = condensa_cmd(tmp.path(), &["topo", &file, "--algorithm", "dfs"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("graph has cycles"), "{}", stderr);

    let args = ["topo", file.as_str(), "--algorithm", "dfs", "--condense"];
    let json = condensa_json(tmp.path(), &args);
    assert_eq!(json["algorithm"], "DFSTopologicalSort");
    assert_eq!(json["order"].as_array().unwrap().len(), 3);
}

#[test]
fn test_topo_condensed_orders_components() {
    let tmp = TempDir::new().unwrap();
    let file = write_graph(tmp.path(), "g.json", &cyclic_graph());

    let json = condensa_json(tmp.path(), &["topo", &file, "--condense"]);
    assert_eq!(json["condensed"], true);
    assert_eq!(json["order"].as_array().unwrap().len(), 3);
}

#[test]
fn test_topo_dag_order() {
    let tmp = TempDir::new().unwrap();
    let file = write_graph(tmp.path(), "dag.json", &dag());

    let stdout = condensa_ok(tmp.path(), &["topo", &file]);
    assert!(
        stdout.contains("KahnTopologicalSort: 0 -> 1 -> 2 -> 3"),
        "{}",
        stdout
    );

    let stdout = condensa_ok(tmp.path(), &["topo", &file, "--algorithm", "dfs"]);
    assert!(stdout.contains("DFSTopologicalSort: 0 -> "), "{}", stdout);
}

// ---------------------------------------------------------------------------
// shortest / critical
// ---------------------------------------------------------------------------

#[test]
fn test_shortest_with_target_prints_path() {
    let tmp = TempDir::new().unwrap();
    let file = write_graph(tmp.path(), "dag.json", &dag());

    let args = ["shortest", file.as_str(), "--source", "0", "--target", "3"];
    let stdout = condensa_ok(tmp.path(), &args);
    assert!(
        stdout.contains("Path to 3 (cost 6): 0 -> 1 -> 2 -> 3"),
        "{}",
        stdout
    );

    let json = condensa_json(tmp.path(), &["shortest", &file, "--source", "1"]);
    assert!(json["distances"][0].is_null());
    assert_eq!(json["distances"][3], 5.0);
}

#[test]
fn test_shortest_rejects_cycle_and_bad_source() {
    let tmp = TempDir::new().unwrap();
    let cyclic = write_graph(tmp.path(), "g.json", &cyclic_graph());
    let output = condensa_cmd(tmp.path(), &["shortest", &cyclic]);
    assert!(!output.status.success());

    let file = write_graph(tmp.path(), "dag.json", &dag());
    let output = condensa_cmd(tmp.path(), &["shortest", &file, "--source", "9"]);
    assert!(!output.status.success());
}

#[test]
fn test_shortest_condensed_maps_source_component() {
    let tmp = TempDir::new().unwrap();
    let file = write_graph(tmp.path(), "g.json", &cyclic_graph());

    let args = [
        "shortest",
        file.as_str(),
        "--source",
        "0",
        "--target",
        "4",
        "--condense",
    ];
    let json = condensa_json(tmp.path(), &args);
    assert_eq!(json["condensed"], true);
    // 0 → {1,2,3} costs 2, then 3 → 4 costs 5.
    let target = json["target"].as_u64().unwrap() as usize;
    assert_eq!(json["distances"][target], 7.0);
    assert_eq!(json["path"].as_array().unwrap().len(), 3);
}

#[test]
fn test_critical_reports_none_for_cycle_and_path_when_condensed() {
    let tmp = TempDir::new().unwrap();
    let file = write_graph(tmp.path(), "g.json", &cyclic_graph());

    let stdout = condensa_ok(tmp.path(), &["critical", &file]);
    assert!(stdout.contains("No critical path"), "{}", stdout);

    let json = condensa_json(tmp.path(), &["critical", &file, "--condense"]);
    assert_eq!(json["found"], true);
    assert_eq!(json["length"], 7.0);
    assert_eq!(json["members"].as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// analyze / generate / config
// ---------------------------------------------------------------------------

#[test]
fn test_analyze_human_and_json() {
    let tmp = TempDir::new().unwrap();
    let file = write_graph(tmp.path(), "g.json", &cyclic_graph());

    let stdout = condensa_ok(tmp.path(), &["analyze", &file, "--cross-check"]);
    assert!(
        stdout.contains("Strongly connected components: 3"),
        "{}",
        stdout
    );
    assert!(
        stdout.contains("TarjanSCC and KosarajuSCC agree"),
        "{}",
        stdout
    );
    assert!(stdout.contains("Critical path (length 7)"), "{}", stdout);

    let json = condensa_json(tmp.path(), &["analyze", &file]);
    assert_eq!(json["components"].as_array().unwrap().len(), 3);
    assert_eq!(json["critical_path"]["length"], 7.0);
    assert!(json.get("partitions_agree").is_none());
}

#[test]
fn test_config_file_selects_algorithm() {
    let tmp = TempDir::new().unwrap();
    let file = write_graph(tmp.path(), "g.json", &cyclic_graph());
    fs::write(
        tmp.path().join("condensa.toml"),
        "[analysis]\nscc = \"kosaraju\"\n",
    )
    .unwrap();

    let json = condensa_json(tmp.path(), &["scc", &file]);
    assert_eq!(json["algorithm"], "KosarajuSCC");

    // An explicit flag still wins.
    let json = condensa_json(tmp.path(), &["scc", &file, "--algorithm", "tarjan"]);
    assert_eq!(json["algorithm"], "TarjanSCC");
}

#[test]
fn test_explicit_missing_config_fails() {
    let tmp = TempDir::new().unwrap();
    let file = write_graph(tmp.path(), "g.json", &dag());
    let output = condensa_cmd(tmp.path(), &["--config", "nope.toml", "scc", &file]);
    assert!(!output.status.success());
}

#[test]
fn test_generate_writes_datasets_that_analyze() {
    let tmp = TempDir::new().unwrap();
    let stdout = condensa_ok(tmp.path(), &["generate", "--dir", "out"]);
    assert!(stdout.contains("Generated 9 datasets"), "{}", stdout);

    let small = tmp.path().join("out").join("small_1.json");
    assert!(small.exists());
    let json = condensa_json(tmp.path(), &["analyze", small.to_str().unwrap()]);
    assert_eq!(json["components"].as_array().unwrap().len(), 6);
    assert_eq!(json["critical_path"]["length"], 12.0);
}

#[test]
fn test_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    let output = condensa_cmd(tmp.path(), &["scc", "absent.json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load graph"), "{}", stderr);
}
