//! `trellis bench` - micro-benchmark suite over a seeded random graph.
//!
//! Times the core graph operations and two representative algorithms against
//! a randomly generated graph, reporting ops/sec per operation. The RNG is
//! seeded so runs are reproducible.

use std::cell::Cell;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use serde_json::Value;

use trellis_core::alg;
use trellis_core::error::Result;
use trellis_core::graph::EdgeKey;

use crate::cli::OutputFormat;
use crate::commands::helpers::ValueGraph;

const KEY_SIZE: usize = 10;
const SAMPLE_DURATION: Duration = Duration::from_millis(50);
const DEFAULT_SEED: u64 = 0x7e11_15;

#[derive(Debug, Serialize)]
struct BenchResult {
    name: &'static str,
    hz: f64,
    runs: u64,
}

fn sample(name: &'static str, mut f: impl FnMut()) -> BenchResult {
    let start = Instant::now();
    let mut runs = 0u64;
    while start.elapsed() < SAMPLE_DURATION {
        f();
        runs += 1;
    }
    let hz = runs as f64 / start.elapsed().as_secs_f64();
    BenchResult { name, hz, runs }
}

fn random_key(rng: &mut StdRng) -> String {
    (0..KEY_SIZE)
        .map(|_| rng.gen_range(b'a'..=b'z') as char)
        .collect()
}

fn build_graph(rng: &mut StdRng, num_nodes: usize, density: f64) -> (ValueGraph, Vec<String>) {
    let mut g = ValueGraph::default();
    let keys: Vec<String> = (0..num_nodes).map(|_| random_key(rng)).collect();
    for key in &keys {
        g.ensure_node(key.clone());
    }
    let num_edges = ((num_nodes * num_nodes) as f64 * density) as usize;
    let mut added = 0;
    while added < num_edges {
        let v = keys[rng.gen_range(0..keys.len())].clone();
        let w = keys[rng.gen_range(0..keys.len())].clone();
        if g.has_edge(&v, &w, None) {
            continue;
        }
        g.set_edge(v, w);
        added += 1;
    }
    (g, keys)
}

#[allow(clippy::too_many_lines)]
pub fn run(nodes: usize, density: f64, seed: Option<u64>, format: OutputFormat) -> Result<()> {
    let mut rng = StdRng::seed_from_u64(seed.unwrap_or(DEFAULT_SEED));
    let (mut g, keys) = build_graph(&mut rng, nodes, density);
    let edge_keys: Vec<EdgeKey> = g.edges().cloned().collect();
    tracing::debug!(nodes = g.node_count(), edges = g.edge_count(), "bench_graph");

    // A deterministic cursor rather than per-iteration RNG draws, so the
    // sampled operation dominates the measurement.
    let cursor = Cell::new(rng.gen_range(0..1000));
    let pick = |range: usize| {
        let i = cursor.get();
        cursor.set(i + 1);
        i % range
    };

    let mut results: Vec<BenchResult> = Vec::new();
    results.push(sample("nodes", || {
        g.nodes().count();
    }));
    results.push(sample("sources", || {
        g.sources();
    }));
    results.push(sample("sinks", || {
        g.sinks();
    }));
    results.push(sample("filter-nodes all", || {
        g.filter_nodes(|_| true);
    }));
    results.push(sample("filter-nodes none", || {
        g.filter_nodes(|_| false);
    }));
    results.push(sample("set-node", || {
        g.set_node("key", Value::from("label"));
    }));
    results.push(sample("node", || {
        g.node(&keys[pick(keys.len())]);
    }));
    results.push(sample("set + remove-node", || {
        g.ensure_node("key");
        g.remove_node("key");
    }));
    results.push(sample("predecessors", || {
        g.predecessors(&keys[pick(keys.len())]);
    }));
    results.push(sample("successors", || {
        g.successors(&keys[pick(keys.len())]);
    }));
    results.push(sample("neighbors", || {
        g.neighbors(&keys[pick(keys.len())]);
    }));
    results.push(sample("edges", || {
        g.edges().count();
    }));
    results.push(sample("set-path", || {
        g.set_path(["a", "b", "c", "d", "e"], None);
    }));
    results.push(sample("set-edge", || {
        g.set_edge_labeled("from", "to", Value::from("label"));
    }));
    if !edge_keys.is_empty() {
        results.push(sample("edge", || {
            g.edge_key(&edge_keys[pick(edge_keys.len())]);
        }));
    }
    results.push(sample("set + remove-edge", || {
        g.set_edge("from", "to");
        g.remove_edge("from", "to", None);
    }));
    results.push(sample("in-edges", || {
        g.in_edges(&keys[pick(keys.len())], None);
    }));
    results.push(sample("out-edges", || {
        g.out_edges(&keys[pick(keys.len())], None);
    }));
    results.push(sample("node-edges", || {
        g.node_edges(&keys[pick(keys.len())], None);
    }));
    results.push(sample("components", || {
        alg::components(&g);
    }));
    results.push(sample("dijkstra-all", || {
        let _ = alg::dijkstra_all(&g);
    }));

    match format {
        OutputFormat::Human => {
            for r in &results {
                println!(
                    "{:>20}: {:>13.2} ops/sec ({} runs sampled)",
                    r.name, r.hz, r.runs
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
    }
    Ok(())
}
