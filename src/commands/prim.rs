//! `trellis prim` - minimum spanning tree.

use trellis_core::alg;
use trellis_core::error::Result;
use trellis_core::json;

use crate::cli::OutputFormat;
use crate::commands::helpers::{label_weight, load_graph};

pub fn run(graph: &str, format: OutputFormat) -> Result<()> {
    let g = load_graph(graph)?;
    let tree = alg::prim(&g, label_weight(&g))?;
    match format {
        OutputFormat::Human => {
            for key in tree.edges() {
                println!("{} {}", key.v, key.w);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json::write(&tree))?)
        }
    }
    Ok(())
}
