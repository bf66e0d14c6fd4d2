//! `trellis topsort` - topological ordering.

use trellis_core::alg;
use trellis_core::error::Result;

use crate::cli::OutputFormat;
use crate::commands::helpers::{load_graph, print_list};

pub fn run(graph: &str, format: OutputFormat) -> Result<()> {
    let g = load_graph(graph)?;
    let order = alg::topsort(&g)?;
    print_list(&order, format)
}
