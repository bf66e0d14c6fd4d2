//! Minimum spanning tree via Prim's algorithm.

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::{EdgeKey, Graph};
use crate::queue::PriorityQueue;


/// Build a minimum spanning tree as a fresh graph containing every input
/// node and one edge per non-root node.
///
/// Every node is seeded at infinite priority and the first enumerated node
/// forced to zero; each extraction connects the extracted node to its
/// recorded parent and relaxes its neighbors through `weight_fn`. A second
/// parentless extraction after the first means some node was never reached
/// by any edge, so the input is not connected and the call fails.
#[tracing::instrument(skip(g, weight_fn))]
pub fn prim<N, E, G, W>(g: &Graph<N, E, G>, weight_fn: W) -> Result<Graph<(), (), ()>>
where
    W: Fn(&EdgeKey) -> f64,
{
    let mut result: Graph<(), (), ()> = Graph::default();
    let mut parents: HashMap<String, String> = HashMap::new();
    let mut pq = PriorityQueue::new();

    let Some(first) = g.nodes().next() else {
        return Ok(result);
    };
    for v in g.nodes() {
        pq.add(v, f64::INFINITY);
        result.ensure_node(v);
    }
    pq.decrease(first, 0.0)?;

    let mut init = false;
    while !pq.is_empty() {
        let v = pq.remove_min()?;
        if let Some(parent) = parents.get(&v) {
            result.set_edge(v.clone(), parent.clone());
        } else if init {
            return Err(GraphError::NotConnected);
        } else {
            init = true;
        }
        for edge in g.node_edges(&v, None).unwrap_or_default() {
            let w = if edge.v == v {
                edge.w.clone()
            } else {
                edge.v.clone()
            };
            if let Some(current) = pq.priority(&w) {
                let weight = weight_fn(&edge);
                if weight < current {
                    parents.insert(w.clone(), v.clone());
                    pq.decrease(&w, weight)?;
                }
            }
        }
    }

    Ok(result)
}
