//! Depth-first traversal in pre- or post-order.

use crate::error::{GraphError, Result};
use crate::graph::Graph;

use super::view::IndexView;

#[cfg(test)]
mod tests;

/// Visit order for depth-first traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Record a node before descending into its children
    Pre,
    /// Record a node after all of its children
    Post,
}

/// Depth-first traversal from one or more roots, visiting each node once.
///
/// Directed graphs navigate via successors, undirected graphs via neighbors.
/// Fails if any root is not in the graph.
pub fn dfs<N, E, G, S>(g: &Graph<N, E, G>, roots: &[S], order: Order) -> Result<Vec<String>>
where
    S: AsRef<str>,
{
    let view = IndexView::new(g);
    let nav: Vec<Vec<usize>> = (0..view.len())
        .map(|i| {
            if g.is_directed() {
                view.succs(i).to_vec()
            } else {
                view.neighbors(i)
            }
        })
        .collect();

    let mut visited = vec![false; view.len()];
    let mut acc: Vec<usize> = Vec::new();
    for root in roots {
        let root = root.as_ref();
        let Some(r) = view.index_of(root) else {
            return Err(GraphError::NodeNotFound {
                id: root.to_string(),
            });
        };
        if !visited[r] {
            walk(&nav, r, order, &mut visited, &mut acc);
        }
    }
    Ok(acc.into_iter().map(|i| view.id(i).to_string()).collect())
}

/// Iterative traversal holding (node, next-child) frames on an owned stack,
/// preserving the visitation order of the recursive formulation.
fn walk(nav: &[Vec<usize>], root: usize, order: Order, visited: &mut [bool], acc: &mut Vec<usize>) {
    visited[root] = true;
    if order == Order::Pre {
        acc.push(root);
    }
    let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
    while let Some(frame) = stack.last_mut() {
        let (v, i) = *frame;
        if i < nav[v].len() {
            frame.1 += 1;
            let w = nav[v][i];
            if !visited[w] {
                visited[w] = true;
                if order == Order::Pre {
                    acc.push(w);
                }
                stack.push((w, 0));
            }
        } else {
            stack.pop();
            if order == Order::Post {
                acc.push(v);
            }
        }
    }
}

/// Depth-first preorder from the given roots.
pub fn preorder<N, E, G, S>(g: &Graph<N, E, G>, roots: &[S]) -> Result<Vec<String>>
where
    S: AsRef<str>,
{
    dfs(g, roots, Order::Pre)
}

/// Depth-first postorder from the given roots.
pub fn postorder<N, E, G, S>(g: &Graph<N, E, G>, roots: &[S]) -> Result<Vec<String>>
where
    S: AsRef<str>,
{
    dfs(g, roots, Order::Post)
}
