//! `trellis acyclic` - report whether the graph is cycle-free.

use trellis_core::alg;
use trellis_core::error::Result;

use crate::cli::OutputFormat;
use crate::commands::helpers::load_graph;

pub fn run(graph: &str, format: OutputFormat) -> Result<()> {
    let g = load_graph(graph)?;
    let acyclic = alg::is_acyclic(&g);
    match format {
        OutputFormat::Human => println!("{acyclic}"),
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "acyclic": acyclic }))
        }
    }
    Ok(())
}
