//! JSON round-trip adapter.
//!
//! Projects a [`Graph`] to a flat record shape and replays such a record
//! back into a graph. This is the only place the graph's internal maps are
//! converted to or from a flat structure; round-tripping reproduces the mode
//! flags, every node/edge label, the graph label, and the full parent chain.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::graph::{Graph, GraphOptions};


/// Flat record form of a graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "N: Deserialize<'de>, E: Deserialize<'de>, G: Deserialize<'de>"))]
pub struct JsonGraph<N, E, G> {
    pub options: GraphOptions,
    pub nodes: Vec<JsonNode<N>>,
    pub edges: Vec<JsonEdge<E>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<G>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "N: Deserialize<'de>"))]
pub struct JsonNode<N> {
    pub v: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<N>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "E: Deserialize<'de>"))]
pub struct JsonEdge<E> {
    pub v: String,
    pub w: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<E>,
}

/// Project the graph to its record form.
pub fn write<N, E, G>(g: &Graph<N, E, G>) -> JsonGraph<N, E, G>
where
    N: Clone,
    E: Clone,
    G: Clone,
{
    let nodes = g
        .nodes()
        .map(|v| JsonNode {
            v: v.to_string(),
            value: g.node(v).cloned(),
            parent: g.parent(v).map(str::to_string),
        })
        .collect();
    let edges = g
        .edges()
        .map(|key| JsonEdge {
            v: key.v.clone(),
            w: key.w.clone(),
            name: key.name.clone(),
            value: g.edge_key(key).cloned(),
        })
        .collect();
    JsonGraph {
        options: g.options(),
        nodes,
        edges,
        value: g.graph().cloned(),
    }
}

/// Rebuild a graph from its record form by replaying `set_graph`,
/// `set_node` (plus `set_parent` where present), and `set_edge` in that
/// order.
pub fn read<N, E, G>(json: JsonGraph<N, E, G>) -> Result<Graph<N, E, G>>
where
    N: Clone,
    E: Clone,
{
    let mut g: Graph<N, E, G> = Graph::new(json.options);
    if let Some(value) = json.value {
        g.set_graph(value);
    }
    for node in json.nodes {
        match node.value {
            Some(label) => g.set_node(node.v.clone(), label),
            None => g.ensure_node(node.v.clone()),
        };
        if let Some(parent) = node.parent {
            g.set_parent(node.v, Some(parent))?;
        }
    }
    for edge in json.edges {
        g.set_edge_named(edge.v, edge.w, edge.name, edge.value)?;
    }
    Ok(g)
}

/// Serialize the graph to a pretty-printed JSON string.
pub fn to_string_pretty<N, E, G>(g: &Graph<N, E, G>) -> Result<String>
where
    N: Clone + Serialize,
    E: Clone + Serialize,
    G: Clone + Serialize,
{
    Ok(serde_json::to_string_pretty(&write(g))?)
}

/// Parse a graph from its JSON string form.
pub fn from_str<N, E, G>(s: &str) -> Result<Graph<N, E, G>>
where
    N: Clone + DeserializeOwned,
    E: Clone + DeserializeOwned,
    G: DeserializeOwned,
{
    read(serde_json::from_str(s)?)
}
