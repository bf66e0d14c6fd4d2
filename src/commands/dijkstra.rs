//! `trellis dijkstra` - single-source or all-sources shortest paths.

use std::collections::{BTreeMap, HashMap};

use trellis_core::alg::{self, PathEntry};
use trellis_core::error::{GraphError, Result};

use crate::cli::OutputFormat;
use crate::commands::helpers::{label_weight, load_graph, ValueGraph};

pub fn run(graph: &str, source: Option<&str>, all: bool, format: OutputFormat) -> Result<()> {
    let g = load_graph(graph)?;
    if all {
        let results = alg::dijkstra_all_with(&g, label_weight(&g), |v: &str| {
            g.out_edges(v, None).unwrap_or_default()
        })?;
        return print_all(&results, format);
    }

    let Some(source) = source else {
        return Err(GraphError::UsageError(
            "--source is required unless --all is given".to_string(),
        ));
    };
    if !g.has_node(source) {
        return Err(GraphError::NodeNotFound {
            id: source.to_string(),
        });
    }
    let results = dijkstra_from(&g, source)?;
    print_single(&results, format)
}

fn dijkstra_from(g: &ValueGraph, source: &str) -> Result<HashMap<String, PathEntry>> {
    alg::dijkstra_with(g, source, label_weight(g), |v: &str| {
        g.out_edges(v, None).unwrap_or_default()
    })
}

fn print_single(results: &HashMap<String, PathEntry>, format: OutputFormat) -> Result<()> {
    let ordered: BTreeMap<&str, &PathEntry> =
        results.iter().map(|(k, v)| (k.as_str(), v)).collect();
    match format {
        OutputFormat::Human => {
            for (target, entry) in ordered {
                let via = entry.predecessor.as_deref().unwrap_or("-");
                println!("{target} {} {via}", entry.distance);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ordered)?),
    }
    Ok(())
}

fn print_all(
    results: &HashMap<String, HashMap<String, PathEntry>>,
    format: OutputFormat,
) -> Result<()> {
    let ordered: BTreeMap<&str, BTreeMap<&str, &PathEntry>> = results
        .iter()
        .map(|(source, row)| {
            (
                source.as_str(),
                row.iter().map(|(k, v)| (k.as_str(), v)).collect(),
            )
        })
        .collect();
    match format {
        OutputFormat::Human => {
            for (source, row) in ordered {
                for (target, entry) in row {
                    println!("{source} {target} {}", entry.distance);
                }
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&ordered)?),
    }
    Ok(())
}
