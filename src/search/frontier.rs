//! Open and closed sets

use crate::graph::NodeId;
use indexmap::IndexMap;
use std::collections::HashSet;

/// Costs recorded for a node on the frontier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrontierEntry {
    /// Best known cost from the start node
    pub g: f64,
    /// `g` plus the heuristic estimate; the ranking key
    pub f: f64,
}

/// The open set: nodes discovered but not yet expanded.
///
/// Entries keep the order in which nodes were first discovered. Selection is
/// a linear scan that returns the first entry holding the minimum `f`, so
/// ties always go to the earliest-discovered node.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    entries: IndexMap<NodeId, FrontierEntry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Insert `node`, or lower its costs if `g` beats the recorded one.
    ///
    /// Returns whether the frontier changed. An improved entry keeps its
    /// original position.
    pub fn insert_or_improve(&mut self, node: NodeId, g: f64, f: f64) -> bool {
        match self.entries.get_mut(&node) {
            Some(entry) if g < entry.g => {
                *entry = FrontierEntry { g, f };
                true
            }
            Some(_) => false,
            None => {
                self.entries.insert(node, FrontierEntry { g, f });
                true
            }
        }
    }

    /// The entry with the smallest `f`, earliest-discovered on ties
    pub fn select_best(&self) -> Option<(&NodeId, &FrontierEntry)> {
        let mut best: Option<(&NodeId, &FrontierEntry)> = None;
        for (node, entry) in &self.entries {
            let better = match best {
                Some((_, current)) => entry.f < current.f,
                None => true,
            };
            if better {
                best = Some((node, entry));
            }
        }
        best
    }

    pub fn remove(&mut self, node: &NodeId) -> Option<FrontierEntry> {
        // shift_remove keeps the discovery order of the remaining entries
        self.entries.shift_remove(node)
    }

    pub fn get(&self, node: &NodeId) -> Option<&FrontierEntry> {
        self.entries.get(node)
    }

    /// Best known cost to `node`, if it is on the frontier
    pub fn g_cost(&self, node: &NodeId) -> Option<f64> {
        self.entries.get(node).map(|e| e.g)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The closed set: nodes already expanded.
///
/// Marked nodes never return to the frontier during the same search, even
/// if a cheaper path to them turns up later.
#[derive(Debug, Clone, Default)]
pub struct ExploredSet {
    nodes: HashSet<NodeId>,
}

impl ExploredSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, node: NodeId) {
        self.nodes.insert(node);
    }

    pub fn contains(&self, node: &NodeId) -> bool {
        self.nodes.contains(node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> NodeId {
        NodeId::from(s)
    }

    #[test]
    fn empty_frontier_has_no_best() {
        let frontier = Frontier::new();
        assert!(frontier.select_best().is_none());
        assert!(frontier.is_empty());
    }

    #[test]
    fn selects_minimum_f() {
        let mut frontier = Frontier::new();
        frontier.insert_or_improve(id("a"), 0.0, 5.0);
        frontier.insert_or_improve(id("b"), 0.0, 2.0);
        frontier.insert_or_improve(id("c"), 0.0, 3.0);

        let (best, entry) = frontier.select_best().unwrap();
        assert_eq!(best, &id("b"));
        assert_eq!(entry.f, 2.0);
    }

    #[test]
    fn ties_go_to_first_discovered() {
        let mut frontier = Frontier::new();
        frontier.insert_or_improve(id("c"), 3.0, 3.0);
        frontier.insert_or_improve(id("b"), 1.0, 3.0);
        frontier.insert_or_improve(id("a"), 2.0, 3.0);

        assert_eq!(frontier.select_best().unwrap().0, &id("c"));

        frontier.remove(&id("c"));
        assert_eq!(frontier.select_best().unwrap().0, &id("b"));
    }

    #[test]
    fn improvement_keeps_position() {
        let mut frontier = Frontier::new();
        frontier.insert_or_improve(id("x"), 4.0, 4.0);
        frontier.insert_or_improve(id("y"), 2.0, 2.0);

        assert!(frontier.insert_or_improve(id("x"), 2.0, 2.0));
        // x and y now tie; x was discovered first
        assert_eq!(frontier.select_best().unwrap().0, &id("x"));
    }

    #[test]
    fn only_strictly_better_g_updates() {
        let mut frontier = Frontier::new();
        frontier.insert_or_improve(id("a"), 2.0, 2.0);

        assert!(!frontier.insert_or_improve(id("a"), 2.0, 1.0));
        assert!(!frontier.insert_or_improve(id("a"), 3.0, 0.0));
        assert_eq!(frontier.get(&id("a")), Some(&FrontierEntry { g: 2.0, f: 2.0 }));
    }

    #[test]
    fn explored_set_marks_permanently() {
        let mut explored = ExploredSet::new();
        assert!(!explored.contains(&id("a")));
        explored.mark(id("a"));
        explored.mark(id("a"));
        assert!(explored.contains(&id("a")));
        assert_eq!(explored.len(), 1);
    }
}
