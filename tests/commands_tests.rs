//! Per-subcommand integration tests over fixture graph files.

use std::path::PathBuf;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for trellis
fn trellis() -> Command {
    cargo_bin_cmd!("trellis")
}

fn write_graph(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// The weighted DAG used by the shortest-path fixtures:
/// a->b(1), a->c(2), b->d(3), c->d(3).
fn weighted_dag(dir: &TempDir) -> PathBuf {
    write_graph(
        dir,
        "dag.json",
        r#"{
            "options": { "directed": true, "multigraph": false, "compound": false },
            "nodes": [ { "v": "a" }, { "v": "b" }, { "v": "c" }, { "v": "d" } ],
            "edges": [
                { "v": "a", "w": "b", "value": 1 },
                { "v": "a", "w": "c", "value": 2 },
                { "v": "b", "w": "d", "value": 3 },
                { "v": "c", "w": "d", "value": 3 }
            ]
        }"#,
    )
}

#[test]
fn test_info_reports_counts_and_flags() {
    let dir = TempDir::new().unwrap();
    let path = weighted_dag(&dir);
    trellis()
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("directed: true"))
        .stdout(predicate::str::contains("nodes: 4"))
        .stdout(predicate::str::contains("edges: 4"))
        .stdout(predicate::str::contains("sources: 1"))
        .stdout(predicate::str::contains("sinks: 1"));
}

#[test]
fn test_topsort_orders_a_path() {
    let dir = TempDir::new().unwrap();
    let path = write_graph(
        &dir,
        "path.json",
        r#"{
            "options": { "directed": true },
            "nodes": [ { "v": "b" }, { "v": "c" }, { "v": "a" } ],
            "edges": [ { "v": "b", "w": "c" }, { "v": "c", "w": "a" } ]
        }"#,
    );
    trellis()
        .arg("topsort")
        .arg(&path)
        .assert()
        .success()
        .stdout("b\nc\na\n");
}

#[test]
fn test_topsort_rejects_cycles() {
    let dir = TempDir::new().unwrap();
    let path = write_graph(
        &dir,
        "cycle.json",
        r#"{
            "options": { "directed": true },
            "nodes": [ { "v": "a" }, { "v": "b" } ],
            "edges": [ { "v": "a", "w": "b" }, { "v": "b", "w": "a" } ]
        }"#,
    );
    trellis()
        .arg("topsort")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cycle"));
}

#[test]
fn test_acyclic_answers_both_ways() {
    let dir = TempDir::new().unwrap();
    let dag = weighted_dag(&dir);
    trellis()
        .arg("acyclic")
        .arg(&dag)
        .assert()
        .success()
        .stdout("true\n");

    let cyclic = write_graph(
        &dir,
        "cycle.json",
        r#"{
            "options": { "directed": true },
            "nodes": [ { "v": "a" } ],
            "edges": [ { "v": "a", "w": "a" } ]
        }"#,
    );
    trellis()
        .arg("acyclic")
        .arg(&cyclic)
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn test_components_ignores_direction() {
    let dir = TempDir::new().unwrap();
    let path = write_graph(
        &dir,
        "two.json",
        r#"{
            "options": { "directed": true },
            "nodes": [ { "v": "a" }, { "v": "b" }, { "v": "c" }, { "v": "d" } ],
            "edges": [ { "v": "a", "w": "b" }, { "v": "d", "w": "c" } ]
        }"#,
    );
    trellis()
        .arg("components")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("a b"))
        .stdout(predicate::str::contains("c d"));
}

#[test]
fn test_tarjan_and_cycles() {
    let dir = TempDir::new().unwrap();
    let path = write_graph(
        &dir,
        "scc.json",
        r#"{
            "options": { "directed": true },
            "nodes": [ { "v": "a" }, { "v": "b" }, { "v": "c" } ],
            "edges": [ { "v": "a", "w": "b" }, { "v": "b", "w": "a" }, { "v": "b", "w": "c" } ]
        }"#,
    );
    trellis()
        .arg("tarjan")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("c"));
    trellis()
        .arg("cycles")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("a"))
        .stdout(predicate::str::contains("b"))
        .stdout(predicate::str::contains("c").not());
}

#[test]
fn test_preorder_from_root() {
    let dir = TempDir::new().unwrap();
    let path = weighted_dag(&dir);
    trellis()
        .args(["preorder", "--root", "a"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("a\n"));
}

#[test]
fn test_preorder_missing_root_is_a_data_error() {
    let dir = TempDir::new().unwrap();
    let path = weighted_dag(&dir);
    trellis()
        .args(["preorder", "--root", "zzz"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("does not contain node"));
}

#[test]
fn test_postorder_ends_at_root() {
    let dir = TempDir::new().unwrap();
    let path = weighted_dag(&dir);
    trellis()
        .args(["postorder", "--root", "a"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::ends_with("a\n"));
}

#[test]
fn test_dijkstra_shortest_paths() {
    let dir = TempDir::new().unwrap();
    let path = weighted_dag(&dir);
    trellis()
        .args(["dijkstra", "--source", "a"])
        .arg(&path)
        .assert()
        .success()
        .stdout("a 0 -\nb 1 a\nc 2 a\nd 4 b\n");
}

#[test]
fn test_dijkstra_json_output() {
    let dir = TempDir::new().unwrap();
    let path = weighted_dag(&dir);
    let assert = trellis()
        .args(["--format", "json", "dijkstra", "--source", "a"])
        .arg(&path)
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["d"]["distance"], serde_json::json!(4.0));
    assert_eq!(parsed["d"]["predecessor"], serde_json::json!("b"));
}

#[test]
fn test_dijkstra_requires_source_or_all() {
    let dir = TempDir::new().unwrap();
    let path = weighted_dag(&dir);
    trellis()
        .arg("dijkstra")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--source"));
}

#[test]
fn test_dijkstra_rejects_negative_weights() {
    let dir = TempDir::new().unwrap();
    let path = write_graph(
        &dir,
        "negative.json",
        r#"{
            "options": { "directed": true },
            "nodes": [ { "v": "a" }, { "v": "b" } ],
            "edges": [ { "v": "a", "w": "b", "value": -1 } ]
        }"#,
    );
    trellis()
        .args(["dijkstra", "--source", "a"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("negative weight"));
}

#[test]
fn test_dijkstra_all_covers_every_source() {
    let dir = TempDir::new().unwrap();
    let path = weighted_dag(&dir);
    let assert = trellis()
        .args(["--format", "json", "dijkstra", "--all"])
        .arg(&path)
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_object().unwrap().len(), 4);
    assert_eq!(parsed["b"]["d"]["distance"], serde_json::json!(3.0));
}

#[test]
fn test_floyd_warshall_matches_dijkstra_on_dag() {
    let dir = TempDir::new().unwrap();
    let path = weighted_dag(&dir);
    let assert = trellis()
        .args(["--format", "json", "floyd-warshall"])
        .arg(&path)
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["a"]["d"]["distance"], serde_json::json!(4.0));
    assert_eq!(parsed["a"]["a"]["distance"], serde_json::json!(0.0));
}

#[test]
fn test_prim_builds_the_minimum_spanning_tree() {
    let dir = TempDir::new().unwrap();
    let path = write_graph(
        &dir,
        "mst.json",
        r#"{
            "options": { "directed": false },
            "nodes": [ { "v": "a" }, { "v": "b" }, { "v": "c" }, { "v": "d" }, { "v": "e" } ],
            "edges": [
                { "v": "a", "w": "b", "value": 1 },
                { "v": "b", "w": "c", "value": 2 },
                { "v": "b", "w": "d", "value": 3 },
                { "v": "c", "w": "d", "value": 20 },
                { "v": "c", "w": "e", "value": 60 },
                { "v": "d", "w": "e", "value": 1 }
            ]
        }"#,
    );
    let assert = trellis().arg("prim").arg(&path).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let edges: Vec<&str> = stdout.lines().collect();
    assert_eq!(edges.len(), 4);
    assert!(!stdout.contains("c d"));
    assert!(!stdout.contains("c e"));
}

#[test]
fn test_prim_rejects_disconnected_input() {
    let dir = TempDir::new().unwrap();
    let path = write_graph(
        &dir,
        "split.json",
        r#"{
            "options": { "directed": false },
            "nodes": [ { "v": "a" }, { "v": "b" } ],
            "edges": []
        }"#,
    );
    trellis()
        .arg("prim")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not connected"));
}

#[test]
fn test_filter_projects_onto_kept_nodes() {
    let dir = TempDir::new().unwrap();
    let path = weighted_dag(&dir);
    let assert = trellis()
        .args(["--format", "json", "filter", "--keep", "a", "--keep", "b"])
        .arg(&path)
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["nodes"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["edges"].as_array().unwrap().len(), 1);
    assert_eq!(parsed["edges"][0]["v"], serde_json::json!("a"));
    assert_eq!(parsed["edges"][0]["w"], serde_json::json!("b"));
}

#[test]
fn test_bench_runs_quickly_on_a_tiny_graph() {
    trellis()
        .args(["bench", "--nodes", "10", "--density", "0.1", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ops/sec"));
}
