//! `trellis preorder` / `trellis postorder` - depth-first traversal.

use trellis_core::alg::{self, Order};
use trellis_core::error::Result;

use crate::cli::OutputFormat;
use crate::commands::helpers::{load_graph, print_list};

pub fn run(graph: &str, roots: &[String], order: Order, format: OutputFormat) -> Result<()> {
    let g = load_graph(graph)?;
    let nodes = alg::dfs(&g, roots, order)?;
    print_list(&nodes, format)
}
