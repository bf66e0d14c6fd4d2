//! `trellis filter` - project a graph onto a subset of its nodes.

use std::collections::HashSet;

use trellis_core::error::Result;
use trellis_core::json;

use crate::cli::OutputFormat;
use crate::commands::helpers::load_graph;

pub fn run(graph: &str, keep: &[String], format: OutputFormat) -> Result<()> {
    let g = load_graph(graph)?;
    let keep: HashSet<&str> = keep.iter().map(String::as_str).collect();
    let filtered = g.filter_nodes(|v| keep.contains(v));
    tracing::debug!(
        kept = filtered.node_count(),
        dropped = g.node_count() - filtered.node_count(),
        "filter_nodes"
    );
    match format {
        OutputFormat::Human => {
            for v in filtered.nodes() {
                println!("{v}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json::write(&filtered))?)
        }
    }
    Ok(())
}
