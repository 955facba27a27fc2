//! Path reconstruction from the predecessor map

use crate::graph::{GraphEdge, NodeId};
use std::collections::HashMap;

/// Walk `came_from` back from `goal` and return the edges start-first.
///
/// The start node has no predecessor entry, so the walk stops there. A goal
/// without an entry (the start itself) yields an empty path.
pub fn reconstruct_path<E: GraphEdge>(came_from: &HashMap<NodeId, E>, goal: &NodeId) -> Vec<E> {
    let mut path = Vec::new();
    let mut current = goal;

    // Each node contributes at most one edge; anything longer is a cycle
    // left behind by negative costs.
    while let Some(edge) = came_from.get(current) {
        if path.len() > came_from.len() {
            break;
        }
        path.push(edge.clone());
        current = edge.source();
    }

    path.reverse();
    path
}
