//! Graph algorithms.
//!
//! One module per algorithm, all operating on [`crate::graph::Graph`]. The
//! depth-first family (dfs, topsort, tarjan) runs iteratively over a dense
//! index snapshot, so stack depth is bounded by an owned heap structure
//! rather than the call stack.

pub mod components;
pub mod dfs;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod prim;
pub mod tarjan;
pub mod topsort;
mod view;

pub use components::components;
pub use dfs::{dfs, postorder, preorder, Order};
pub use dijkstra::{dijkstra, dijkstra_all, dijkstra_all_with, dijkstra_with, PathEntry};
pub use floyd_warshall::{floyd_warshall, floyd_warshall_with};
pub use prim::prim;
pub use tarjan::{find_cycles, tarjan};
pub use topsort::{is_acyclic, topsort};
