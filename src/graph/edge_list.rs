//! In-memory graph backed by a fixed edge list

use super::edge::{Edge, GraphEdge};
use super::node::NodeId;
use crate::search::{CallbackError, EdgeSource};
use async_trait::async_trait;
use indexmap::{IndexMap, IndexSet};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading an edge list
#[derive(Debug, Error)]
pub enum GraphLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown graph file format: {0}")]
    UnknownFormat(String),
}

/// An edge source over a fixed list of edges.
///
/// Outgoing edges are indexed by origin node. Lookups return edges in the
/// order they were added, which keeps searches over the same list
/// deterministic.
#[derive(Debug, Clone)]
pub struct EdgeList<E = Edge> {
    outgoing: IndexMap<NodeId, Vec<E>>,
    nodes: IndexSet<NodeId>,
    len: usize,
}

impl<E: GraphEdge> EdgeList<E> {
    pub fn new() -> Self {
        Self {
            outgoing: IndexMap::new(),
            nodes: IndexSet::new(),
            len: 0,
        }
    }

    pub fn from_edges(edges: impl IntoIterator<Item = E>) -> Self {
        let mut list = Self::new();
        for edge in edges {
            list.push(edge);
        }
        list
    }

    /// Append an edge
    pub fn push(&mut self, edge: E) {
        self.nodes.insert(edge.source().clone());
        self.nodes.insert(edge.target().clone());
        self.outgoing
            .entry(edge.source().clone())
            .or_default()
            .push(edge);
        self.len += 1;
    }

    /// Outgoing edges of a node, in insertion order
    pub fn outgoing(&self, node: &NodeId) -> &[E] {
        self.outgoing.get(node).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Distinct node ids, in the order they were first seen
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter()
    }

    /// All edges, grouped by origin node
    pub fn edges(&self) -> impl Iterator<Item = &E> {
        self.outgoing.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<E: GraphEdge> Default for EdgeList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: GraphEdge> FromIterator<E> for EdgeList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl EdgeList<Edge> {
    /// Load an edge array from a `.json`, `.yaml` or `.yml` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GraphLoadError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        let content = std::fs::read_to_string(path)?;

        match extension.as_str() {
            "json" => Self::from_json_str(&content),
            "yaml" | "yml" => Self::from_yaml_str(&content),
            _ => Err(GraphLoadError::UnknownFormat(path.display().to_string())),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self, GraphLoadError> {
        let edges: Vec<Edge> = serde_json::from_str(content)?;
        Ok(Self::from_edges(edges))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, GraphLoadError> {
        let edges: Vec<Edge> = serde_yaml::from_str(content)?;
        Ok(Self::from_edges(edges))
    }
}

#[async_trait]
impl<E: GraphEdge> EdgeSource<E> for EdgeList<E> {
    async fn exit_arcs(&self, node: &NodeId) -> Result<Vec<E>, CallbackError> {
        Ok(self.outgoing(node).to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample() -> EdgeList {
        EdgeList::from_edges([
            Edge::new("a", "b", 1.0),
            Edge::new("b", "c", 2.0),
            Edge::new("a", "c", 4.0),
        ])
    }

    #[test]
    fn outgoing_preserves_insertion_order() {
        let list = sample();
        let targets: Vec<&str> = list
            .outgoing(&NodeId::from("a"))
            .iter()
            .map(|e| e.to.as_str())
            .collect();
        assert_eq!(targets, vec!["b", "c"]);
        assert!(list.outgoing(&NodeId::from("c")).is_empty());
    }

    #[test]
    fn nodes_in_first_seen_order() {
        let list = sample();
        let nodes: Vec<&str> = list.nodes().map(|n| n.as_str()).collect();
        assert_eq!(nodes, vec!["a", "b", "c"]);
        assert_eq!(list.len(), 3);

        // grouped by origin, insertion order within each group
        let edges: Vec<(&str, &str)> = list
            .edges()
            .map(|e| (e.from.as_str(), e.to.as_str()))
            .collect();
        assert_eq!(edges, vec![("a", "b"), ("a", "c"), ("b", "c")]);
    }

    #[tokio::test]
    async fn exit_arcs_for_unknown_node_is_empty() {
        let list = sample();
        let arcs = list.exit_arcs(&NodeId::from("zzz")).await.unwrap();
        assert!(arcs.is_empty());
    }

    #[test]
    fn parses_yaml() {
        let yaml = "- from: a\n  to: b\n  cost: 1\n- from: b\n  to: a\n  cost: 2.5\n";
        let list = EdgeList::from_yaml_str(yaml).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.outgoing(&NodeId::from("b"))[0].cost, 2.5);
    }

    #[test]
    fn load_reads_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[{{"from": "x", "to": "y", "cost": 3}}]"#).unwrap();

        let list = EdgeList::load(file.path()).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.outgoing(&NodeId::from("x"))[0], Edge::new("x", "y", 3.0));
    }

    #[test]
    fn load_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        let err = EdgeList::load(file.path()).unwrap_err();
        assert!(matches!(err, GraphLoadError::UnknownFormat(_)));
    }

    fn graph_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_reads_yml_file() {
        let file = graph_file(".yml", "- from: p\n  to: q\n  cost: 0.5\n");
        let list = EdgeList::load(file.path()).unwrap();
        assert_eq!(list.outgoing(&NodeId::from("p"))[0], Edge::new("p", "q", 0.5));
    }

    #[test]
    fn load_matches_extension_case_insensitively() {
        let file = graph_file(".YAML", "- from: p\n  to: q\n  cost: 2\n");
        let list = EdgeList::load(file.path()).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EdgeList::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, GraphLoadError::Io(_)));
    }

    #[test]
    fn load_reports_malformed_json() {
        let file = graph_file(".json", r#"[{"from": "x", "to": }]"#);
        let err = EdgeList::load(file.path()).unwrap_err();
        assert!(matches!(err, GraphLoadError::Json(_)));
    }

    #[test]
    fn load_reports_malformed_yaml() {
        let file = graph_file(".yaml", "- from: [x\n  to: y\n");
        let err = EdgeList::load(file.path()).unwrap_err();
        assert!(matches!(err, GraphLoadError::Yaml(_)));
    }
}
