//! Shared fixtures for the search integration tests
//!
//! The fixture graph is a small directed graph with cheap detours: the
//! direct edge a -> c costs 3, while a -> b -> c costs 2.

#![allow(dead_code)]

use astar::{CallbackError, Edge, EdgeList, EdgeSource, GraphEdge, Heuristic, NodeId};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

pub const FIXTURE_EDGES: &[(&str, &str, f64)] = &[
    ("a", "b", 1.0),
    ("a", "c", 3.0),
    ("b", "a", 1.0),
    ("b", "c", 1.0),
    ("b", "d", 3.0),
    ("c", "a", 3.0),
    ("c", "b", 1.0),
    ("c", "d", 1.0),
    ("c", "e", 1.0),
    ("d", "b", 3.0),
    ("d", "c", 1.0),
    ("d", "e", 1.0),
    ("e", "c", 1.0),
    ("e", "d", 1.0),
    ("f", "e", 1.0),
];

pub fn edge(from: &str, to: &str, cost: f64) -> Edge {
    Edge::new(from, to, cost)
}

pub fn fixture_graph() -> EdgeList {
    FIXTURE_EDGES
        .iter()
        .map(|&(from, to, cost)| edge(from, to, cost))
        .collect()
}

/// Error raised by failing fixture callbacks
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ServiceError(pub &'static str);

pub fn service_error(message: &'static str) -> CallbackError {
    Box::new(ServiceError(message))
}

/// Shared call log
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// The fixture graph behind an async boundary.
///
/// Every lookup yields to the scheduler before answering and is written to
/// the call log, so tests can check the order of suspension points.
pub struct RecordingGraph {
    edges: EdgeList,
    pub log: CallLog,
}

impl RecordingGraph {
    pub fn new(edges: EdgeList) -> Arc<Self> {
        Arc::new(Self {
            edges,
            log: CallLog::default(),
        })
    }

    pub fn fixture() -> Arc<Self> {
        Self::new(fixture_graph())
    }
}

#[async_trait]
impl EdgeSource<Edge> for RecordingGraph {
    async fn exit_arcs(&self, node: &NodeId) -> Result<Vec<Edge>, CallbackError> {
        tokio::task::yield_now().await;
        self.log.push(format!("edges({})", node));
        Ok(self.edges.outgoing(node).to_vec())
    }
}

#[async_trait]
impl Heuristic for RecordingGraph {
    async fn estimate(&self, from: &NodeId, to: &NodeId) -> Result<f64, CallbackError> {
        tokio::task::yield_now().await;
        self.log.push(format!("h({},{})", from, to));
        Ok(0.0)
    }
}

/// True if `path` is an unbroken chain of edges from `start` to `goal`
pub fn is_chain<E: GraphEdge>(path: &[E], start: &str, goal: &str) -> bool {
    let Some(first) = path.first() else {
        return start == goal;
    };
    if first.source().as_str() != start {
        return false;
    }
    let linked = path
        .windows(2)
        .all(|pair| pair[0].target() == pair[1].source());
    linked && path[path.len() - 1].target().as_str() == goal
}
