use serde::{Deserialize, Serialize};

/// Mode flags fixed at construction time.
///
/// Defaults to a simple directed graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphOptions {
    /// Edges have a distinguished tail and head
    #[serde(default = "default_directed")]
    pub directed: bool,
    /// Multiple named edges are allowed between the same node pair
    #[serde(default)]
    pub multigraph: bool,
    /// Nodes are additionally organized into a parent/child tree
    #[serde(default)]
    pub compound: bool,
}

fn default_directed() -> bool {
    true
}

impl Default for GraphOptions {
    fn default() -> Self {
        GraphOptions {
            directed: true,
            multigraph: false,
            compound: false,
        }
    }
}

/// Canonical identity of an edge: tail, head, and optional multigraph name.
///
/// For undirected graphs the endpoints are stored lexicographically smaller
/// first, so both insertion orders denote the same edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub v: String,
    pub w: String,
    pub name: Option<String>,
}

impl EdgeKey {
    pub fn new(
        v: impl Into<String>,
        w: impl Into<String>,
        name: Option<impl Into<String>>,
    ) -> Self {
        EdgeKey {
            v: v.into(),
            w: w.into(),
            name: name.map(Into::into),
        }
    }
}

impl std::fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} -> {} [{}]", self.v, self.w, name),
            None => write!(f, "{} -> {}", self.v, self.w),
        }
    }
}

/// Label applied to nodes created without an explicit label.
///
/// An explicit strategy value rather than an overloaded parameter: a node is
/// either left unlabeled, given a shared constant, or given the result of a
/// resolver called with the node id.
pub enum NodeLabelDefault<N> {
    Unlabeled,
    Constant(N),
    Resolver(Box<dyn Fn(&str) -> N + Send + Sync>),
}

impl<N> Default for NodeLabelDefault<N> {
    fn default() -> Self {
        NodeLabelDefault::Unlabeled
    }
}

impl<N: Clone> NodeLabelDefault<N> {
    pub(crate) fn resolve(&self, id: &str) -> Option<N> {
        match self {
            NodeLabelDefault::Unlabeled => None,
            NodeLabelDefault::Constant(label) => Some(label.clone()),
            NodeLabelDefault::Resolver(f) => Some(f(id)),
        }
    }
}

/// Label applied to edges created without an explicit label.
///
/// The resolver receives the canonicalized tail, head, and name.
pub enum EdgeLabelDefault<E> {
    Unlabeled,
    Constant(E),
    Resolver(Box<dyn Fn(&str, &str, Option<&str>) -> E + Send + Sync>),
}

impl<E> Default for EdgeLabelDefault<E> {
    fn default() -> Self {
        EdgeLabelDefault::Unlabeled
    }
}

impl<E: Clone> EdgeLabelDefault<E> {
    pub(crate) fn resolve(&self, key: &EdgeKey) -> Option<E> {
        match self {
            EdgeLabelDefault::Unlabeled => None,
            EdgeLabelDefault::Constant(label) => Some(label.clone()),
            EdgeLabelDefault::Resolver(f) => Some(f(&key.v, &key.w, key.name.as_deref())),
        }
    }
}
