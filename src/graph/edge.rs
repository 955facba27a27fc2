//! Edge representation

use super::node::NodeId;
use serde::{Deserialize, Serialize};

/// The contract every edge type handed to the search engine implements.
///
/// Callers may use richer edge objects than [`Edge`]; the engine only needs
/// to know the endpoints and the stored cost. The cost actually charged for
/// traversal comes from the configured edge-cost strategy, which reads
/// [`GraphEdge::cost`] by default.
pub trait GraphEdge: Clone + Send + Sync + 'static {
    /// Origin node
    fn source(&self) -> &NodeId;

    /// Destination node
    fn target(&self) -> &NodeId;

    /// Stored traversal cost. Assumed finite and non-negative.
    fn cost(&self) -> f64;
}

/// A directed, weighted edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Origin node
    pub from: NodeId,
    /// Destination node
    pub to: NodeId,
    /// Traversal cost
    pub cost: f64,
}

impl Edge {
    /// Create a new edge
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, cost: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            cost,
        }
    }
}

impl GraphEdge for Edge {
    fn source(&self) -> &NodeId {
        &self.from
    }

    fn target(&self) -> &NodeId {
        &self.to
    }

    fn cost(&self) -> f64 {
        self.cost
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.cost)
    }
}
