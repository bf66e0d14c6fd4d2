//! Shared dense-index snapshot used by the traversal algorithms.

use std::collections::HashMap;

use crate::graph::Graph;

/// A frozen view of a graph's nodes and adjacency, addressed by dense
/// integer indices. Built once per algorithm run so the inner loops index
/// vectors instead of hashing node ids; string ids only cross the boundary
/// on the way in (roots) and on the way out (results).
pub(crate) struct IndexView<'g> {
    ids: Vec<&'g str>,
    index: HashMap<&'g str, usize>,
    succs: Vec<Vec<usize>>,
    preds: Vec<Vec<usize>>,
}

impl<'g> IndexView<'g> {
    pub fn new<N, E, G>(g: &'g Graph<N, E, G>) -> Self {
        let ids: Vec<&str> = g.nodes().collect();
        let index: HashMap<&str, usize> =
            ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        let mut succs = Vec::with_capacity(ids.len());
        let mut preds = Vec::with_capacity(ids.len());
        for &id in &ids {
            succs.push(resolve(&index, g.successors(id)));
            preds.push(resolve(&index, g.predecessors(id)));
        }
        IndexView {
            ids,
            index,
            succs,
            preds,
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn id(&self, i: usize) -> &'g str {
        self.ids[i]
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn succs(&self, i: usize) -> &[usize] {
        &self.succs[i]
    }

    pub fn preds(&self, i: usize) -> &[usize] {
        &self.preds[i]
    }

    /// Predecessors then previously-unseen successors, each index once.
    pub fn neighbors(&self, i: usize) -> Vec<usize> {
        let mut out = self.preds[i].clone();
        for &w in &self.succs[i] {
            if !self.preds[i].contains(&w) {
                out.push(w);
            }
        }
        out
    }
}

fn resolve(index: &HashMap<&str, usize>, ids: Option<Vec<&str>>) -> Vec<usize> {
    ids.unwrap_or_default()
        .into_iter()
        .filter_map(|id| index.get(id).copied())
        .collect()
}
