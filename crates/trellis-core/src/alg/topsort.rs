//! Topological ordering and the acyclicity check built on it.

use crate::error::CycleError;
use crate::graph::Graph;

use super::view::IndexView;


/// Order the nodes so that every edge v -> w has v earlier than w.
///
/// Seeds a depth-first walk over predecessors from every sink and pushes a
/// node only after all of its predecessors are resolved. Re-entering a node
/// still on the active path signals a cycle, as does any node left
/// unvisited after seeding: such a node is unreachable from every sink only
/// because it sits in a cycle. A cycle fails the whole call; no partial
/// order is returned.
pub fn topsort<N, E, G>(g: &Graph<N, E, G>) -> Result<Vec<String>, CycleError> {
    let view = IndexView::new(g);
    let mut visited = vec![false; view.len()];
    let mut on_stack = vec![false; view.len()];
    let mut order: Vec<usize> = Vec::with_capacity(view.len());

    for sink in 0..view.len() {
        if view.succs(sink).is_empty() {
            visit(&view, sink, &mut visited, &mut on_stack, &mut order)?;
        }
    }
    if order.len() != view.len() {
        return Err(CycleError);
    }
    Ok(order.into_iter().map(|i| view.id(i).to_string()).collect())
}

/// Iterative post-order walk over predecessors from one sink.
fn visit(
    view: &IndexView<'_>,
    root: usize,
    visited: &mut [bool],
    on_stack: &mut [bool],
    order: &mut Vec<usize>,
) -> Result<(), CycleError> {
    if visited[root] {
        return Ok(());
    }
    visited[root] = true;
    on_stack[root] = true;
    let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
    while let Some(frame) = stack.last_mut() {
        let (v, i) = *frame;
        let preds = view.preds(v);
        if i < preds.len() {
            frame.1 += 1;
            let u = preds[i];
            if on_stack[u] {
                return Err(CycleError);
            }
            if !visited[u] {
                visited[u] = true;
                on_stack[u] = true;
                stack.push((u, 0));
            }
        } else {
            on_stack[v] = false;
            order.push(v);
            stack.pop();
        }
    }
    Ok(())
}

/// Whether the graph is free of directed cycles.
///
/// Interprets exactly the cycle signal from [`topsort`]; there is no other
/// failure to swallow.
pub fn is_acyclic<N, E, G>(g: &Graph<N, E, G>) -> bool {
    topsort(g).is_ok()
}
