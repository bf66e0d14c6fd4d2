//! `trellis info` - summarize a graph file.

use serde::Serialize;

use trellis_core::error::Result;

use crate::cli::OutputFormat;
use crate::commands::helpers::load_graph;

#[derive(Debug, Serialize)]
struct InfoReport {
    directed: bool,
    multigraph: bool,
    compound: bool,
    nodes: usize,
    edges: usize,
    sources: usize,
    sinks: usize,
}

pub fn run(graph: &str, format: OutputFormat) -> Result<()> {
    let g = load_graph(graph)?;
    let options = g.options();
    let report = InfoReport {
        directed: options.directed,
        multigraph: options.multigraph,
        compound: options.compound,
        nodes: g.node_count(),
        edges: g.edge_count(),
        sources: g.sources().len(),
        sinks: g.sinks().len(),
    };

    match format {
        OutputFormat::Human => {
            println!("directed: {}", report.directed);
            println!("multigraph: {}", report.multigraph);
            println!("compound: {}", report.compound);
            println!("nodes: {}", report.nodes);
            println!("edges: {}", report.edges);
            println!("sources: {}", report.sources);
            println!("sinks: {}", report.sinks);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
