//! A* search over caller-supplied graphs
//!
//! The engine drives the search loop; edges, costs, heuristic estimates and
//! goal tests come from the strategies it is configured with.

mod callbacks;
mod engine;
mod error;
mod frontier;
mod goal;
mod path;
mod traits;
mod types;

pub use callbacks::{
    cost_async_fn, cost_fn, edges_async_fn, edges_fn, goal_async_fn, goal_fn, heuristic_async_fn,
    heuristic_fn, AsyncFn, SyncFn,
};
pub use engine::{Astar, AstarOptions};
pub use error::{CallbackError, CallbackStage, SearchError, SearchOutcome};
pub use frontier::{ExploredSet, Frontier, FrontierEntry};
pub use goal::{ExactMatch, GoalSpec};
pub use path::reconstruct_path;
pub use traits::{
    EdgeCost, EdgeSource, GoalPredicate, Heuristic, NoEdges, StoredCost, ZeroHeuristic,
};
pub use types::SearchResult;
