use crate::alg::dfs::{postorder, preorder};
use crate::error::GraphError;
use crate::graph::{Graph, GraphOptions};

type TestGraph = Graph<(), (), ()>;

fn pos(nodes: &[String], id: &str) -> usize {
    nodes.iter().position(|n| n == id).unwrap()
}

#[test]
fn test_preorder_singleton() {
    let mut g = TestGraph::default();
    g.ensure_node("a");
    assert_eq!(preorder(&g, &["a"]).unwrap(), vec!["a"]);
}

#[test]
fn test_preorder_visits_each_node_once() {
    let mut g = TestGraph::default();
    g.set_path(["a", "b", "d", "e"], None);
    g.set_path(["a", "c", "d", "e"], None);
    let mut nodes = preorder(&g, &["a"]).unwrap();
    nodes.sort();
    assert_eq!(nodes, vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn test_preorder_tree_ordering() {
    let mut g = TestGraph::default();
    g.set_edge("a", "b");
    g.set_path(["a", "c", "d"], None);
    g.set_edge("c", "e");
    let nodes = preorder(&g, &["a"]).unwrap();
    assert_eq!(nodes.len(), 5);
    assert!(pos(&nodes, "b") > pos(&nodes, "a"));
    assert!(pos(&nodes, "c") > pos(&nodes, "a"));
    assert!(pos(&nodes, "d") > pos(&nodes, "c"));
    assert!(pos(&nodes, "e") > pos(&nodes, "c"));
}

#[test]
fn test_preorder_multiple_roots() {
    let mut g = TestGraph::default();
    g.set_edge("a", "b");
    g.set_edge("c", "d");
    g.ensure_node("e");
    g.ensure_node("f");
    let nodes = preorder(&g, &["a", "c", "e"]).unwrap();
    let mut seen = nodes.clone();
    seen.sort();
    assert_eq!(seen, vec!["a", "b", "c", "d", "e"]);
    assert!(pos(&nodes, "b") > pos(&nodes, "a"));
    assert!(pos(&nodes, "d") > pos(&nodes, "c"));
}

#[test]
fn test_preorder_fails_on_missing_root() {
    let mut g = TestGraph::default();
    g.ensure_node("a");
    assert!(matches!(
        preorder(&g, &["b"]),
        Err(GraphError::NodeNotFound { .. })
    ));
}

#[test]
fn test_postorder_singleton() {
    let mut g = TestGraph::default();
    g.ensure_node("a");
    assert_eq!(postorder(&g, &["a"]).unwrap(), vec!["a"]);
}

#[test]
fn test_postorder_tree_ordering() {
    let mut g = TestGraph::default();
    g.set_edge("a", "b");
    g.set_path(["a", "c", "d"], None);
    g.set_edge("c", "e");
    let nodes = postorder(&g, &["a"]).unwrap();
    assert_eq!(nodes.len(), 5);
    assert!(pos(&nodes, "b") < pos(&nodes, "a"));
    assert!(pos(&nodes, "c") < pos(&nodes, "a"));
    assert!(pos(&nodes, "d") < pos(&nodes, "c"));
    assert!(pos(&nodes, "e") < pos(&nodes, "c"));
}

#[test]
fn test_postorder_multiple_connected_roots() {
    let mut g = TestGraph::default();
    g.set_edge("a", "b");
    g.set_edge("a", "c");
    g.set_edge("d", "c");
    let nodes = postorder(&g, &["a", "d"]).unwrap();
    let mut seen = nodes.clone();
    seen.sort();
    assert_eq!(seen, vec!["a", "b", "c", "d"]);
    assert!(pos(&nodes, "b") < pos(&nodes, "a"));
    assert!(pos(&nodes, "c") < pos(&nodes, "a"));
    assert!(pos(&nodes, "c") < pos(&nodes, "d"));
}

#[test]
fn test_postorder_fails_on_missing_root() {
    let mut g = TestGraph::default();
    g.ensure_node("a");
    assert!(matches!(
        postorder(&g, &["b"]),
        Err(GraphError::NodeNotFound { .. })
    ));
}

#[test]
fn test_undirected_traversal_navigates_neighbors() {
    let mut g: TestGraph = Graph::new(GraphOptions {
        directed: false,
        ..GraphOptions::default()
    });
    // the edge is entered against its canonical orientation
    g.set_edge("b", "a");
    let nodes = preorder(&g, &["a"]).unwrap();
    assert_eq!(nodes.len(), 2);
}

#[test]
fn test_directed_traversal_ignores_predecessors() {
    let mut g = TestGraph::default();
    g.set_edge("b", "a");
    assert_eq!(preorder(&g, &["a"]).unwrap(), vec!["a"]);
}
