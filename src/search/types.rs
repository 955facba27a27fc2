//! Search result

use crate::graph::{Edge, GraphEdge, NodeId};
use serde::{Deserialize, Serialize};

/// A found path and its total cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult<E = Edge> {
    /// Total cost from start to goal
    pub cost: f64,
    /// Edges from start to goal, in travel order. Empty when start is the goal.
    pub path: Vec<E>,
}

impl<E> SearchResult<E> {
    /// Number of edges (hops) in the path
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

impl<E: GraphEdge> SearchResult<E> {
    /// Nodes visited along the path, start first.
    ///
    /// Empty for an empty path: the result alone does not know the start.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes = Vec::with_capacity(self.path.len() + 1);
        if let Some(first) = self.path.first() {
            nodes.push(first.source().clone());
        }
        nodes.extend(self.path.iter().map(|e| e.target().clone()));
        nodes
    }

    /// Sum of the stored costs of the path's edges
    pub fn edge_cost_sum(&self) -> f64 {
        self.path.iter().map(|e| e.cost()).sum()
    }
}
