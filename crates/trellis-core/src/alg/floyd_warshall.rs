//! All-pairs shortest paths via Floyd-Warshall.

use std::collections::HashMap;

use crate::graph::{EdgeKey, Graph};

use super::dijkstra::PathEntry;
use super::view::IndexView;


/// All-pairs distances with every edge weighing 1, following outgoing edges.
pub fn floyd_warshall<N, E, G>(g: &Graph<N, E, G>) -> HashMap<String, HashMap<String, PathEntry>> {
    floyd_warshall_with(g, |_| 1.0, |v: &str| g.out_edges(v, None).unwrap_or_default())
}

/// All-pairs distances using a caller-supplied weight function and edge
/// selector. Unlike Dijkstra there is no negative-weight restriction.
pub fn floyd_warshall_with<N, E, G, W, F>(
    g: &Graph<N, E, G>,
    weight_fn: W,
    edge_fn: F,
) -> HashMap<String, HashMap<String, PathEntry>>
where
    W: Fn(&EdgeKey) -> f64,
    F: Fn(&str) -> Vec<EdgeKey>,
{
    let view = IndexView::new(g);
    let n = view.len();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    let mut pred: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];

    for i in 0..n {
        dist[i][i] = 0.0;
        let v = view.id(i);
        for edge in edge_fn(v) {
            let other = if edge.v != v { &edge.v } else { &edge.w };
            let Some(j) = view.index_of(other) else {
                continue;
            };
            dist[i][j] = weight_fn(&edge);
            pred[i][j] = Some(i);
        }
    }

    for k in 0..n {
        for i in 0..n {
            if dist[i][k] == f64::INFINITY {
                continue;
            }
            for j in 0..n {
                let alt = dist[i][k] + dist[k][j];
                if alt < dist[i][j] {
                    dist[i][j] = alt;
                    pred[i][j] = pred[k][j];
                }
            }
        }
    }

    let mut results = HashMap::new();
    for i in 0..n {
        let mut row = HashMap::new();
        for j in 0..n {
            row.insert(
                view.id(j).to_string(),
                PathEntry {
                    distance: dist[i][j],
                    predecessor: pred[i][j].map(|p| view.id(p).to_string()),
                },
            );
        }
        results.insert(view.id(i).to_string(), row);
    }
    results
}
