//! Core graph data structures

mod edge;
mod edge_list;
mod node;

pub use edge::{Edge, GraphEdge};
pub use edge_list::{EdgeList, GraphLoadError};
pub use node::NodeId;
