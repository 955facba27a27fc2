//! Astar: asynchronous best-first graph search
//!
//! An A* engine over graphs the caller never has to materialize: nodes are
//! opaque string identities, and outgoing edges, edge costs, heuristic
//! estimates and goal tests are all produced on demand, possibly by async
//! lookups against remote sources.
//!
//! # Core Concepts
//!
//! - **Edge sources**: enumerate the outgoing edges of a node
//! - **Heuristics**: estimate remaining cost; the default zero estimate
//!   gives uniform-cost (Dijkstra) search
//! - **Goals**: a literal node or any predicate over nodes
//!
//! # Example
//!
//! ```
//! use astar::{Astar, Edge, EdgeList};
//!
//! # tokio_test::block_on(async {
//! let graph = EdgeList::from_edges([
//!     Edge::new("a", "b", 1.0),
//!     Edge::new("b", "c", 1.0),
//!     Edge::new("a", "c", 3.0),
//! ]);
//! let astar = Astar::with_edges(graph);
//!
//! let result = astar.find_path("a", "c").await.unwrap();
//! assert_eq!(result.cost, 2.0);
//! # });
//! ```

mod graph;
pub mod search;

pub use graph::{Edge, EdgeList, GraphEdge, GraphLoadError, NodeId};
pub use search::{
    Astar, AstarOptions, CallbackError, CallbackStage, EdgeCost, EdgeSource, GoalPredicate,
    GoalSpec, Heuristic, SearchError, SearchOutcome, SearchResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
