//! `trellis tarjan` - strongly connected components.

use trellis_core::alg;
use trellis_core::error::Result;

use crate::cli::OutputFormat;
use crate::commands::helpers::{load_graph, print_groups};

pub fn run(graph: &str, format: OutputFormat) -> Result<()> {
    let g = load_graph(graph)?;
    let groups = alg::tarjan(&g);
    print_groups(&groups, format)
}
