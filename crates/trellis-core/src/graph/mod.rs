//! The graph data structure.
//!
//! [`Graph`] is a mutable in-memory store of string-identified nodes and
//! edges, with optional multigraph and compound (nested) modes. Node and edge
//! labels are generic; a label is always optional, so an unlabeled node is
//! representable without inventing a sentinel label value.
//!
//! Mutators return `&mut Self` (or `Result<&mut Self>` where they can fail
//! before touching any state) so calls can be chained.

use std::collections::HashMap;

use indexmap::{IndexMap, IndexSet};

use crate::error::{GraphError, Result};

pub mod types;

pub use types::{EdgeKey, EdgeLabelDefault, GraphOptions, NodeLabelDefault};


/// Distinguishes "no label argument given" from an explicit label write,
/// which may itself clear the label.
enum LabelArg<T> {
    Absent,
    Explicit(Option<T>),
}

/// A directed or undirected graph with optional multi-edges and an optional
/// parent/child tree over its nodes.
pub struct Graph<N, E, G> {
    options: GraphOptions,
    label: Option<G>,
    default_node_label: NodeLabelDefault<N>,
    default_edge_label: EdgeLabelDefault<E>,

    /// Node id -> label, in insertion order.
    nodes: IndexMap<String, Option<N>>,
    /// Canonical edge key -> label, in stable order.
    edges: IndexMap<EdgeKey, Option<E>>,

    /// Node -> incoming edge keys.
    ins: HashMap<String, IndexSet<EdgeKey>>,
    /// Node -> outgoing edge keys.
    outs: HashMap<String, IndexSet<EdgeKey>>,
    /// Node -> predecessor -> number of parallel edges.
    preds: HashMap<String, IndexMap<String, usize>>,
    /// Node -> successor -> number of parallel edges.
    sucs: HashMap<String, IndexMap<String, usize>>,

    /// Compound tree: node -> explicit parent.
    parent: HashMap<String, String>,
    /// Compound tree: node -> direct children.
    children: HashMap<String, IndexSet<String>>,
    /// Nodes directly under the virtual root.
    root_children: IndexSet<String>,
}

impl<N, E, G> Default for Graph<N, E, G> {
    fn default() -> Self {
        Graph::new(GraphOptions::default())
    }
}

impl<N, E, G> Graph<N, E, G> {
    pub fn new(options: GraphOptions) -> Self {
        Graph {
            options,
            label: None,
            default_node_label: NodeLabelDefault::default(),
            default_edge_label: EdgeLabelDefault::default(),
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
            ins: HashMap::new(),
            outs: HashMap::new(),
            preds: HashMap::new(),
            sucs: HashMap::new(),
            parent: HashMap::new(),
            children: HashMap::new(),
            root_children: IndexSet::new(),
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    pub fn is_multigraph(&self) -> bool {
        self.options.multigraph
    }

    pub fn is_compound(&self) -> bool {
        self.options.compound
    }

    /// The label attached to the graph as a whole, if any.
    pub fn graph(&self) -> Option<&G> {
        self.label.as_ref()
    }

    pub fn set_graph(&mut self, label: G) -> &mut Self {
        self.label = Some(label);
        self
    }

    pub fn clear_graph_label(&mut self) -> &mut Self {
        self.label = None;
        self
    }

    pub fn set_default_node_label(&mut self, default: NodeLabelDefault<N>) -> &mut Self {
        self.default_node_label = default;
        self
    }

    pub fn set_default_edge_label(&mut self, default: EdgeLabelDefault<E>) -> &mut Self {
        self.default_edge_label = default;
        self
    }

    /* === Nodes =========================================================== */

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn has_node(&self, v: &str) -> bool {
        self.nodes.contains_key(v)
    }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// The node's label, if the node exists and carries one.
    pub fn node(&self, v: &str) -> Option<&N> {
        self.nodes.get(v).and_then(Option::as_ref)
    }

    /// Registers the node and initializes its adjacency entries. `label` is
    /// the initial label slot; existing nodes are never re-initialized.
    fn init_node(&mut self, id: String, label: Option<N>) {
        self.ins.insert(id.clone(), IndexSet::new());
        self.outs.insert(id.clone(), IndexSet::new());
        self.preds.insert(id.clone(), IndexMap::new());
        self.sucs.insert(id.clone(), IndexMap::new());
        if self.options.compound {
            self.root_children.insert(id.clone());
        }
        self.nodes.insert(id, label);
    }

    /// Insert the node with an explicit label, replacing any existing label.
    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(slot) = self.nodes.get_mut(&id) {
            *slot = Some(label);
            return self;
        }
        self.init_node(id, Some(label));
        self
    }

    /// Insert the node if absent, using the default label strategy. A no-op
    /// on an existing node: its label is never clobbered.
    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self
    where
        N: Clone,
    {
        let id = id.into();
        if self.nodes.contains_key(&id) {
            return self;
        }
        let label = self.default_node_label.resolve(&id);
        self.init_node(id, label);
        self
    }

    /// Insert the node if absent and explicitly clear its label.
    pub fn clear_node_label(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if let Some(slot) = self.nodes.get_mut(&id) {
            *slot = None;
            return self;
        }
        self.init_node(id, None);
        self
    }

    /// Bulk insert, sharing one label across all ids when given.
    pub fn set_nodes<I, S>(&mut self, ids: I, label: Option<N>) -> &mut Self
    where
        N: Clone,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            match &label {
                Some(l) => self.set_node(id, l.clone()),
                None => self.ensure_node(id),
            };
        }
        self
    }

    /// Remove the node, every edge incident on it, and its compound-tree
    /// entries. Children are promoted to the removed node's own parent.
    /// Idempotent.
    pub fn remove_node(&mut self, v: &str) -> &mut Self {
        if !self.nodes.contains_key(v) {
            return self;
        }
        tracing::debug!(node = v, "remove_node");

        let mut incident: IndexSet<EdgeKey> = IndexSet::new();
        if let Some(ins) = self.ins.get(v) {
            incident.extend(ins.iter().cloned());
        }
        if let Some(outs) = self.outs.get(v) {
            incident.extend(outs.iter().cloned());
        }
        for key in &incident {
            self.remove_canonical_edge(key);
        }

        if self.options.compound {
            let promoted_to = self.parent.get(v).cloned();
            if let Some(kids) = self.children.remove(v) {
                for child in &kids {
                    self.attach(child, promoted_to.as_deref());
                }
            }
            match self.parent.remove(v) {
                Some(p) => {
                    if let Some(siblings) = self.children.get_mut(&p) {
                        siblings.shift_remove(v);
                    }
                }
                None => {
                    self.root_children.shift_remove(v);
                }
            }
        }

        self.ins.remove(v);
        self.outs.remove(v);
        self.preds.remove(v);
        self.sucs.remove(v);
        self.nodes.shift_remove(v);
        self
    }

    /* === Compound tree =================================================== */

    /// Move `v` under `parent` (both must already be nodes), or to the root.
    fn attach(&mut self, v: &str, parent: Option<&str>) {
        match self.parent.remove(v) {
            Some(old) => {
                if let Some(siblings) = self.children.get_mut(&old) {
                    siblings.shift_remove(v);
                }
            }
            None => {
                self.root_children.shift_remove(v);
            }
        }
        match parent {
            Some(p) => {
                self.parent.insert(v.to_string(), p.to_string());
                self.children
                    .entry(p.to_string())
                    .or_default()
                    .insert(v.to_string());
            }
            None => {
                self.root_children.insert(v.to_string());
            }
        }
    }

    /// Set or clear the explicit parent of `v`, creating both nodes if
    /// absent. Fails on a non-compound graph, and when the assignment would
    /// make the parent tree cyclic; neither failure mutates anything.
    pub fn set_parent(
        &mut self,
        v: impl Into<String>,
        parent: Option<impl Into<String>>,
    ) -> Result<&mut Self>
    where
        N: Clone,
    {
        if !self.options.compound {
            return Err(GraphError::NotCompound);
        }
        let v = v.into();
        match parent {
            None => {
                self.ensure_node(v.clone());
                self.attach(&v, None);
            }
            Some(p) => {
                let p = p.into();
                // Walk ancestors of the proposed parent; hitting v (or v
                // itself as parent) means the assignment closes a loop.
                let mut ancestor = Some(p.as_str());
                while let Some(a) = ancestor {
                    if a == v {
                        return Err(GraphError::ParentWouldCycle {
                            child: v,
                            parent: p,
                        });
                    }
                    ancestor = self.parent.get(a).map(String::as_str);
                }
                self.ensure_node(v.clone());
                self.ensure_node(p.clone());
                self.attach(&v, Some(&p));
            }
        }
        Ok(self)
    }

    /// The explicit parent of `v`. `None` when `v` sits directly under the
    /// root, is absent, or the graph is not compound.
    pub fn parent(&self, v: &str) -> Option<&str> {
        self.parent.get(v).map(String::as_str)
    }

    /// Direct children of `v`. `None` when `v` is not in the graph.
    pub fn children(&self, v: &str) -> Option<Vec<&str>> {
        if !self.has_node(v) {
            return None;
        }
        if !self.options.compound {
            return Some(Vec::new());
        }
        Some(
            self.children
                .get(v)
                .map(|set| set.iter().map(String::as_str).collect())
                .unwrap_or_default(),
        )
    }

    /// Children of the virtual root: top-level nodes in compound mode, every
    /// node otherwise.
    pub fn children_root(&self) -> Vec<&str> {
        if !self.options.compound {
            return self.nodes().collect();
        }
        self.root_children.iter().map(String::as_str).collect()
    }

    /* === Edges =========================================================== */

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edge keys, in an arbitrary but stable order.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.keys()
    }

    /// Canonical form of an edge key: undirected endpoints are reordered so
    /// the lexicographically smaller id comes first.
    fn canonical_key(
        &self,
        v: impl Into<String>,
        w: impl Into<String>,
        name: Option<String>,
    ) -> EdgeKey {
        let (mut v, mut w) = (v.into(), w.into());
        if !self.options.directed && v > w {
            std::mem::swap(&mut v, &mut w);
        }
        EdgeKey { v, w, name }
    }

    /// Create or update the edge at `key` (assumed canonical).
    fn upsert_edge(&mut self, key: EdgeKey, label: LabelArg<E>)
    where
        N: Clone,
        E: Clone,
    {
        if let Some(slot) = self.edges.get_mut(&key) {
            if let LabelArg::Explicit(label) = label {
                *slot = label;
            }
            return;
        }
        self.ensure_node(key.v.clone());
        self.ensure_node(key.w.clone());
        let label = match label {
            LabelArg::Explicit(label) => label,
            LabelArg::Absent => self.default_edge_label.resolve(&key),
        };
        self.insert_edge_raw(key, label);
    }

    /// Insert a brand-new canonical edge whose endpoints already exist,
    /// updating all four adjacency maps.
    fn insert_edge_raw(&mut self, key: EdgeKey, label: Option<E>) {
        if let Some(set) = self.outs.get_mut(&key.v) {
            set.insert(key.clone());
        }
        if let Some(set) = self.ins.get_mut(&key.w) {
            set.insert(key.clone());
        }
        if let Some(counts) = self.sucs.get_mut(&key.v) {
            *counts.entry(key.w.clone()).or_insert(0) += 1;
        }
        if let Some(counts) = self.preds.get_mut(&key.w) {
            *counts.entry(key.v.clone()).or_insert(0) += 1;
        }
        self.edges.insert(key, label);
    }

    /// Insert the edge if absent, leaving an existing edge's label alone.
    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>) -> &mut Self
    where
        N: Clone,
        E: Clone,
    {
        let key = self.canonical_key(v, w, None);
        self.upsert_edge(key, LabelArg::Absent);
        self
    }

    /// Insert or update the edge with an explicit label.
    pub fn set_edge_labeled(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        label: E,
    ) -> &mut Self
    where
        N: Clone,
        E: Clone,
    {
        let key = self.canonical_key(v, w, None);
        self.upsert_edge(key, LabelArg::Explicit(Some(label)));
        self
    }

    /// Insert or update a (possibly named) edge. `label: None` means "no
    /// label argument": an existing edge keeps its label, a new edge gets the
    /// default. Fails if a name is supplied on a non-multigraph.
    pub fn set_edge_named(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        name: Option<impl Into<String>>,
        label: Option<E>,
    ) -> Result<&mut Self>
    where
        N: Clone,
        E: Clone,
    {
        let name = name.map(Into::into);
        if name.is_some() && !self.options.multigraph {
            return Err(GraphError::EdgeNameNotAllowed);
        }
        let key = self.canonical_key(v, w, name);
        let label = match label {
            Some(l) => LabelArg::Explicit(Some(l)),
            None => LabelArg::Absent,
        };
        self.upsert_edge(key, label);
        Ok(self)
    }

    /// Insert or update the edge described by `key`.
    pub fn set_edge_key(&mut self, key: &EdgeKey, label: Option<E>) -> Result<&mut Self>
    where
        N: Clone,
        E: Clone,
    {
        self.set_edge_named(key.v.clone(), key.w.clone(), key.name.clone(), label)
    }

    /// Insert the edge if absent and explicitly clear its label.
    pub fn clear_edge_label(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        name: Option<impl Into<String>>,
    ) -> Result<&mut Self>
    where
        N: Clone,
        E: Clone,
    {
        let name = name.map(Into::into);
        if name.is_some() && !self.options.multigraph {
            return Err(GraphError::EdgeNameNotAllowed);
        }
        let key = self.canonical_key(v, w, name);
        self.upsert_edge(key, LabelArg::Explicit(None));
        Ok(self)
    }

    /// Create a directed chain of edges across consecutive ids, sharing
    /// `label` when given.
    pub fn set_path<I, S>(&mut self, ids: I, label: Option<E>) -> &mut Self
    where
        N: Clone,
        E: Clone,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut prev: Option<String> = None;
        for id in ids {
            let id = id.into();
            if let Some(v) = prev {
                let key = self.canonical_key(v, id.clone(), None);
                match &label {
                    Some(l) => self.upsert_edge(key, LabelArg::Explicit(Some(l.clone()))),
                    None => self.upsert_edge(key, LabelArg::Absent),
                }
            } else {
                self.ensure_node(id.clone());
            }
            prev = Some(id);
        }
        self
    }

    pub fn has_edge(&self, v: &str, w: &str, name: Option<&str>) -> bool {
        let key = self.canonical_key(v, w, name.map(str::to_string));
        self.edges.contains_key(&key)
    }

    pub fn has_edge_key(&self, key: &EdgeKey) -> bool {
        let key = self.canonical_key(key.v.clone(), key.w.clone(), key.name.clone());
        self.edges.contains_key(&key)
    }

    /// The edge's label, if the edge exists and carries one.
    pub fn edge(&self, v: &str, w: &str, name: Option<&str>) -> Option<&E> {
        let key = self.canonical_key(v, w, name.map(str::to_string));
        self.edges.get(&key).and_then(Option::as_ref)
    }

    pub fn edge_key(&self, key: &EdgeKey) -> Option<&E> {
        let key = self.canonical_key(key.v.clone(), key.w.clone(), key.name.clone());
        self.edges.get(&key).and_then(Option::as_ref)
    }

    /// Remove the canonical `key`, reversing the adjacency bookkeeping. The
    /// ref-count entry for the node pair is deleted only when it reaches
    /// zero, so parallel edges keep the pair adjacent.
    fn remove_canonical_edge(&mut self, key: &EdgeKey) {
        if self.edges.shift_remove(key).is_none() {
            return;
        }
        if let Some(set) = self.outs.get_mut(&key.v) {
            set.shift_remove(key);
        }
        if let Some(set) = self.ins.get_mut(&key.w) {
            set.shift_remove(key);
        }
        decrement_ref(self.sucs.get_mut(&key.v), &key.w);
        decrement_ref(self.preds.get_mut(&key.w), &key.v);
    }

    /// Remove the edge; a no-op when it does not exist.
    pub fn remove_edge(&mut self, v: &str, w: &str, name: Option<&str>) -> &mut Self {
        let key = self.canonical_key(v, w, name.map(str::to_string));
        self.remove_canonical_edge(&key);
        self
    }

    pub fn remove_edge_key(&mut self, key: &EdgeKey) -> &mut Self {
        let key = self.canonical_key(key.v.clone(), key.w.clone(), key.name.clone());
        self.remove_canonical_edge(&key);
        self
    }

    /* === Adjacency queries =============================================== */

    /// Ids with at least one edge into `v`. `None` when `v` is absent,
    /// `Some(empty)` when it merely has no predecessors.
    pub fn predecessors(&self, v: &str) -> Option<Vec<&str>> {
        self.preds
            .get(v)
            .map(|counts| counts.keys().map(String::as_str).collect())
    }

    /// Ids with at least one edge out of `v`.
    pub fn successors(&self, v: &str) -> Option<Vec<&str>> {
        self.sucs
            .get(v)
            .map(|counts| counts.keys().map(String::as_str).collect())
    }

    /// Union of predecessors and successors; each id appears once.
    pub fn neighbors(&self, v: &str) -> Option<Vec<&str>> {
        let preds = self.preds.get(v)?;
        let sucs = self.sucs.get(v)?;
        let mut out: Vec<&str> = preds.keys().map(String::as_str).collect();
        for s in sucs.keys() {
            if !preds.contains_key(s) {
                out.push(s);
            }
        }
        Some(out)
    }

    /// True when `v` has no outgoing adjacency (directed) or no adjacency at
    /// all (undirected).
    pub fn is_leaf(&self, v: &str) -> bool {
        if self.options.directed {
            self.successors(v).is_none_or(|s| s.is_empty())
        } else {
            self.neighbors(v).is_none_or(|n| n.is_empty())
        }
    }

    /// Nodes with no incoming edges.
    pub fn sources(&self) -> Vec<&str> {
        self.nodes
            .keys()
            .filter(|v| self.ins.get(v.as_str()).is_some_and(IndexSet::is_empty))
            .map(String::as_str)
            .collect()
    }

    /// Nodes with no outgoing edges.
    pub fn sinks(&self) -> Vec<&str> {
        self.nodes
            .keys()
            .filter(|v| self.outs.get(v.as_str()).is_some_and(IndexSet::is_empty))
            .map(String::as_str)
            .collect()
    }

    /// Edges pointing at `v`, optionally only those coming from `from`.
    /// `None` when `v` is absent.
    pub fn in_edges(&self, v: &str, from: Option<&str>) -> Option<Vec<EdgeKey>> {
        self.ins.get(v).map(|set| {
            set.iter()
                .filter(|key| from.is_none_or(|u| key.v == u))
                .cloned()
                .collect()
        })
    }

    /// Edges leaving `v`, optionally only those pointing at `to`.
    pub fn out_edges(&self, v: &str, to: Option<&str>) -> Option<Vec<EdgeKey>> {
        self.outs.get(v).map(|set| {
            set.iter()
                .filter(|key| to.is_none_or(|w| key.w == w))
                .cloned()
                .collect()
        })
    }

    /// All edges incident on `v`, optionally only those shared with `other`.
    pub fn node_edges(&self, v: &str, other: Option<&str>) -> Option<Vec<EdgeKey>> {
        let mut edges = self.in_edges(v, other)?;
        edges.extend(self.out_edges(v, other)?);
        Some(edges)
    }

    /* === Projection ====================================================== */

    /// A new graph with the same mode flags and graph label, keeping exactly
    /// the nodes satisfying `predicate` and the edges whose endpoints both
    /// survive. Compound parents are resolved by walking up the original
    /// chain to the nearest surviving ancestor.
    pub fn filter_nodes<F>(&self, predicate: F) -> Graph<N, E, G>
    where
        F: Fn(&str) -> bool,
        N: Clone,
        E: Clone,
        G: Clone,
    {
        let mut out = Graph::new(self.options);
        out.label = self.label.clone();

        for (id, label) in &self.nodes {
            if predicate(id) {
                out.init_node(id.clone(), label.clone());
            }
        }
        for (key, label) in &self.edges {
            if out.nodes.contains_key(&key.v) && out.nodes.contains_key(&key.w) {
                out.insert_edge_raw(key.clone(), label.clone());
            }
        }

        if self.options.compound {
            let ids: Vec<String> = out.nodes.keys().cloned().collect();
            for v in ids {
                let mut ancestor = self.parent.get(&v);
                while let Some(p) = ancestor {
                    if out.nodes.contains_key(p) {
                        break;
                    }
                    ancestor = self.parent.get(p);
                }
                if let Some(p) = ancestor.cloned() {
                    out.attach(&v, Some(&p));
                }
            }
        }

        out
    }
}

fn decrement_ref(counts: Option<&mut IndexMap<String, usize>>, id: &str) {
    if let Some(counts) = counts {
        if let Some(count) = counts.get_mut(id) {
            *count -= 1;
            if *count == 0 {
                counts.shift_remove(id);
            }
        }
    }
}
