//! Trellis Core Library
//!
//! Graph data structure and algorithms core for the trellis CLI: a
//! directed/undirected, optionally multi-edge, optionally compound graph
//! store, a decrease-key priority queue, the standard algorithm suite
//! (traversal, topological ordering, strongly connected components,
//! shortest paths, minimum spanning tree), and a JSON round-trip adapter.

pub mod alg;
pub mod error;
pub mod graph;
pub mod json;
pub mod logging;
pub mod queue;
