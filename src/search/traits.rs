//! Collaborator traits — the contracts the search engine calls into
//!
//! Every method is async: the engine awaits each call before taking its next
//! step, so implementations are free to fetch data from remote sources.
//! Each trait ships with the conservative default the engine falls back to
//! when no override is configured.

use super::error::CallbackError;
use crate::graph::{GraphEdge, NodeId};
use async_trait::async_trait;

/// Enumerates the outgoing edges of a node.
#[async_trait]
pub trait EdgeSource<E: GraphEdge>: Send + Sync {
    /// Edges leaving `node`. Order matters: it decides which of several
    /// equally good paths the search reports.
    async fn exit_arcs(&self, node: &NodeId) -> Result<Vec<E>, CallbackError>;
}

/// Estimates the remaining cost between two nodes.
///
/// Estimates must be finite and non-negative, and must not overestimate the
/// true remaining cost if optimal paths are required.
#[async_trait]
pub trait Heuristic: Send + Sync {
    async fn estimate(&self, from: &NodeId, to: &NodeId) -> Result<f64, CallbackError>;
}

/// Computes the traversal cost of an edge.
#[async_trait]
pub trait EdgeCost<E: GraphEdge>: Send + Sync {
    async fn cost(&self, edge: &E) -> Result<f64, CallbackError>;
}

/// Decides whether a node satisfies the search goal.
#[async_trait]
pub trait GoalPredicate: Send + Sync {
    async fn is_goal(&self, node: &NodeId) -> Result<bool, CallbackError>;
}

/// Default edge source: every node is a dead end.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEdges;

#[async_trait]
impl<E: GraphEdge> EdgeSource<E> for NoEdges {
    async fn exit_arcs(&self, _node: &NodeId) -> Result<Vec<E>, CallbackError> {
        Ok(Vec::new())
    }
}

/// Default heuristic: always zero, which turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

#[async_trait]
impl Heuristic for ZeroHeuristic {
    async fn estimate(&self, _from: &NodeId, _to: &NodeId) -> Result<f64, CallbackError> {
        Ok(0.0)
    }
}

/// Default edge cost: the cost stored on the edge itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoredCost;

#[async_trait]
impl<E: GraphEdge> EdgeCost<E> for StoredCost {
    async fn cost(&self, edge: &E) -> Result<f64, CallbackError> {
        Ok(edge.cost())
    }
}
