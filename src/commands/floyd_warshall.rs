//! `trellis floyd-warshall` - all-pairs shortest paths.

use std::collections::BTreeMap;

use trellis_core::alg::{self, PathEntry};
use trellis_core::error::Result;

use crate::cli::OutputFormat;
use crate::commands::helpers::{label_weight, load_graph};

pub fn run(graph: &str, format: OutputFormat) -> Result<()> {
    let g = load_graph(graph)?;
    let results = alg::floyd_warshall_with(&g, label_weight(&g), |v: &str| {
        g.out_edges(v, None).unwrap_or_default()
    });

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
