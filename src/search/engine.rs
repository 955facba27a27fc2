//! Astar: the search engine and its configuration

use super::error::{CallbackStage, SearchError, SearchOutcome};
use super::frontier::{ExploredSet, Frontier};
use super::goal::GoalSpec;
use super::path::reconstruct_path;
use super::traits::{EdgeCost, EdgeSource, Heuristic, NoEdges, StoredCost, ZeroHeuristic};
use super::types::SearchResult;
use crate::graph::{Edge, GraphEdge, NodeId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// Construction options for [`Astar`].
///
/// Every field is independently optional; anything left unset falls back
/// to the default strategy (no edges, zero heuristic, stored edge cost,
/// unbounded expansions).
pub struct AstarOptions<E: GraphEdge = Edge> {
    exit_arcs: Option<Arc<dyn EdgeSource<E>>>,
    heuristic: Option<Arc<dyn Heuristic>>,
    edge_cost: Option<Arc<dyn EdgeCost<E>>>,
    max_expansions: Option<usize>,
}

impl<E: GraphEdge> AstarOptions<E> {
    pub fn new() -> Self {
        Self {
            exit_arcs: None,
            heuristic: None,
            edge_cost: None,
            max_expansions: None,
        }
    }

    /// Set the edge enumeration strategy
    pub fn with_exit_arcs(self, source: impl EdgeSource<E> + 'static) -> Self {
        self.with_shared_exit_arcs(Arc::new(source))
    }

    pub fn with_shared_exit_arcs(mut self, source: Arc<dyn EdgeSource<E>>) -> Self {
        self.exit_arcs = Some(source);
        self
    }

    /// Set the heuristic
    pub fn with_heuristic(self, heuristic: impl Heuristic + 'static) -> Self {
        self.with_shared_heuristic(Arc::new(heuristic))
    }

    pub fn with_shared_heuristic(mut self, heuristic: Arc<dyn Heuristic>) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    /// Set the edge cost strategy
    pub fn with_edge_cost(self, edge_cost: impl EdgeCost<E> + 'static) -> Self {
        self.with_shared_edge_cost(Arc::new(edge_cost))
    }

    pub fn with_shared_edge_cost(mut self, edge_cost: Arc<dyn EdgeCost<E>>) -> Self {
        self.edge_cost = Some(edge_cost);
        self
    }

    /// Fail searches that would expand more than `limit` nodes
    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}

impl<E: GraphEdge> Default for AstarOptions<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Best-first graph search over a caller-supplied graph.
///
/// The engine holds only its strategies. Every [`Astar::find_path`] call
/// allocates its own open set, closed set and predecessor map, so one
/// engine can serve concurrent searches as long as the strategies are
/// themselves safe to call concurrently.
pub struct Astar<E: GraphEdge = Edge> {
    exit_arcs: Arc<dyn EdgeSource<E>>,
    heuristic: Arc<dyn Heuristic>,
    edge_cost: Arc<dyn EdgeCost<E>>,
    max_expansions: Option<usize>,
}

impl<E: GraphEdge> Clone for Astar<E> {
    fn clone(&self) -> Self {
        Self {
            exit_arcs: Arc::clone(&self.exit_arcs),
            heuristic: Arc::clone(&self.heuristic),
            edge_cost: Arc::clone(&self.edge_cost),
            max_expansions: self.max_expansions,
        }
    }
}

impl<E: GraphEdge> std::fmt::Debug for Astar<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Astar")
            .field("max_expansions", &self.max_expansions)
            .finish_non_exhaustive()
    }
}

impl<E: GraphEdge> Default for Astar<E> {
    fn default() -> Self {
        Self::new(AstarOptions::default())
    }
}

impl<E: GraphEdge> Astar<E> {
    /// Create an engine, filling unset options with the defaults
    pub fn new(options: AstarOptions<E>) -> Self {
        Self {
            exit_arcs: options.exit_arcs.unwrap_or_else(|| Arc::new(NoEdges)),
            heuristic: options.heuristic.unwrap_or_else(|| Arc::new(ZeroHeuristic)),
            edge_cost: options.edge_cost.unwrap_or_else(|| Arc::new(StoredCost)),
            max_expansions: options.max_expansions,
        }
    }

    /// Engine over `source` with every other option at its default
    pub fn with_edges(source: impl EdgeSource<E> + 'static) -> Self {
        Self::new(AstarOptions::new().with_exit_arcs(source))
    }

    /// The configured heuristic estimate between two nodes
    pub async fn h(&self, from: &NodeId, to: &NodeId) -> SearchOutcome<f64> {
        self.heuristic
            .estimate(from, to)
            .await
            .map_err(SearchError::callback(CallbackStage::Heuristic))
    }

    /// Find a cheapest path from `start` to a node satisfying `goal`.
    ///
    /// Fails with [`SearchError::NoPathToGoal`] when every reachable node
    /// has been expanded without meeting the goal, and with
    /// [`SearchError::Callback`] carrying the original error when any
    /// strategy fails.
    pub async fn find_path(
        &self,
        start: impl Into<NodeId>,
        goal: impl Into<GoalSpec>,
    ) -> SearchOutcome<SearchResult<E>> {
        self.search(start.into(), goal.into()).await
    }

    #[instrument(name = "astar.find_path", skip_all, fields(start = %start, goal = %goal))]
    async fn search(&self, start: NodeId, goal: GoalSpec) -> SearchOutcome<SearchResult<E>> {
        debug!("finding path");
        let goal = goal.resolve();

        let mut frontier = Frontier::new();
        let mut explored = ExploredSet::new();
        let mut came_from: HashMap<NodeId, E> = HashMap::new();
        let mut expansions = 0usize;

        let start_f = self.h(&start, &start).await?;
        frontier.insert_or_improve(start.clone(), 0.0, start_f);

        loop {
            let (best, best_g, best_f) = match frontier.select_best() {
                Some((node, entry)) => (node.clone(), entry.g, entry.f),
                None => {
                    debug!(expansions, "frontier exhausted");
                    return Err(SearchError::NoPathToGoal);
                }
            };

            let reached = goal
                .is_goal(&best)
                .await
                .map_err(SearchError::callback(CallbackStage::Goal))?;
            if reached {
                let path = reconstruct_path(&came_from, &best);
                debug!(goal = %best, cost = best_g, hops = path.len(), expansions, "path found");
                return Ok(SearchResult { cost: best_g, path });
            }

            if let Some(limit) = self.max_expansions {
                if expansions >= limit {
                    debug!(limit, "expansion limit reached");
                    return Err(SearchError::ExpansionLimit(limit));
                }
            }
            expansions += 1;
            trace!(node = %best, g = best_g, f = best_f, iteration = expansions, "expanding");

            let edges = self
                .exit_arcs
                .exit_arcs(&best)
                .await
                .map_err(SearchError::callback(CallbackStage::EdgeSource))?;

            for edge in edges {
                let to = edge.target().clone();
                if explored.contains(&to) {
                    continue;
                }

                let cost = self
                    .edge_cost
                    .cost(&edge)
                    .await
                    .map_err(SearchError::callback(CallbackStage::EdgeCost))?;
                let new_g = best_g + cost;

                let improves = frontier.g_cost(&to).is_none_or(|g| new_g < g);
                if improves {
                    // h is always queried as (start, node)
                    let new_f = new_g + self.h(&start, &to).await?;
                    trace!(from = %best, to = %to, g = new_g, f = new_f, "relaxed");
                    frontier.insert_or_improve(to.clone(), new_g, new_f);
                    came_from.insert(to, edge);
                }
            }

            explored.mark(best.clone());
            frontier.remove(&best);
        }
    }
}
