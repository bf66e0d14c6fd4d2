//! Connected components, ignoring edge direction.

use std::collections::VecDeque;

use crate::graph::Graph;

use super::view::IndexView;


/// Partition the nodes into maximal connected groups, exploring both
/// successors and predecessors regardless of the graph's directedness.
pub fn components<N, E, G>(g: &Graph<N, E, G>) -> Vec<Vec<String>> {
    let view = IndexView::new(g);
    let mut seen = vec![false; view.len()];
    let mut groups: Vec<Vec<String>> = Vec::new();

    for start in 0..view.len() {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut group: Vec<String> = Vec::new();
        let mut queue: VecDeque<usize> = VecDeque::from([start]);
        while let Some(v) = queue.pop_front() {
            group.push(view.id(v).to_string());
            for &w in view.succs(v).iter().chain(view.preds(v)) {
                if !seen[w] {
                    seen[w] = true;
                    queue.push_back(w);
                }
            }
        }
        groups.push(group);
    }

    groups
}
