//! Single-source and all-sources shortest paths.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::{EdgeKey, Graph};
use crate::queue::PriorityQueue;


/// Shortest-path table entry for one target node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathEntry {
    pub distance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predecessor: Option<String>,
}

/// Shortest paths from `source` with every edge weighing 1, following
/// outgoing edges.
pub fn dijkstra<N, E, G>(g: &Graph<N, E, G>, source: &str) -> Result<HashMap<String, PathEntry>> {
    dijkstra_with(g, source, |_| 1.0, |v: &str| {
        g.out_edges(v, None).unwrap_or_default()
    })
}

/// Shortest paths from `source` using a caller-supplied weight function and
/// edge selector. Passing `g.in_edges` as the selector computes paths in the
/// predecessor direction.
///
/// Fails on the first negative edge weight encountered. Extraction stops
/// once the minimum remaining distance is infinite; those nodes stay at
/// `f64::INFINITY` with no predecessor.
#[tracing::instrument(skip(g, weight_fn, edge_fn), fields(source = %source))]
pub fn dijkstra_with<N, E, G, W, F>(
    g: &Graph<N, E, G>,
    source: &str,
    weight_fn: W,
    edge_fn: F,
) -> Result<HashMap<String, PathEntry>>
where
    W: Fn(&EdgeKey) -> f64,
    F: Fn(&str) -> Vec<EdgeKey>,
{
    let mut results: HashMap<String, PathEntry> = HashMap::new();
    let mut pq = PriorityQueue::new();
    for v in g.nodes() {
        let distance = if v == source { 0.0 } else { f64::INFINITY };
        results.insert(
            v.to_string(),
            PathEntry {
                distance,
                predecessor: None,
            },
        );
        pq.add(v, distance);
    }

    while !pq.is_empty() {
        let v = pq.remove_min()?;
        let Some(v_distance) = results.get(&v).map(|e| e.distance) else {
            break;
        };
        if v_distance == f64::INFINITY {
            break;
        }
        for edge in edge_fn(&v) {
            let w = if edge.v != v {
                edge.v.clone()
            } else {
                edge.w.clone()
            };
            let weight = weight_fn(&edge);
            if weight < 0.0 {
                return Err(GraphError::NegativeEdgeWeight {
                    v: edge.v,
                    w: edge.w,
                    weight,
                });
            }
            let distance = v_distance + weight;
            if let Some(entry) = results.get_mut(&w) {
                if distance < entry.distance {
                    entry.distance = distance;
                    entry.predecessor = Some(v.clone());
                    pq.decrease(&w, distance)?;
                }
            }
        }
    }

    Ok(results)
}

/// Shortest paths between every pair of nodes, one Dijkstra run per source.
pub fn dijkstra_all<N, E, G>(
    g: &Graph<N, E, G>,
) -> Result<HashMap<String, HashMap<String, PathEntry>>> {
    dijkstra_all_with(g, |_| 1.0, |v: &str| g.out_edges(v, None).unwrap_or_default())
}

/// [`dijkstra_all`] with a caller-supplied weight function and edge
/// selector.
pub fn dijkstra_all_with<N, E, G, W, F>(
    g: &Graph<N, E, G>,
    weight_fn: W,
    edge_fn: F,
) -> Result<HashMap<String, HashMap<String, PathEntry>>>
where
    W: Fn(&EdgeKey) -> f64,
    F: Fn(&str) -> Vec<EdgeKey>,
{
    let mut results = HashMap::new();
    for source in g.nodes() {
        results.insert(
            source.to_string(),
            dijkstra_with(g, source, &weight_fn, &edge_fn)?,
        );
    }
    Ok(results)
}
