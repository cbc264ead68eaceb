/// Core data types for the graph engine
///
/// This module defines the fundamental types used throughout the system:
/// - NodeId / EdgeId: stable arena handles
/// - Node: labeled vertex with its incident edge handles
/// - Edge: directed, weighted edge (parallel edges allowed)
/// - Graph: label index plus node and edge arenas
/// - Walk: sequence of nodes and edges forming a walk

pub mod edge;
pub mod graph;
pub mod ids;
pub mod node;
pub mod path;

pub use edge::Edge;
pub use graph::Graph;
pub use ids::{EdgeId, NodeId};
pub use node::Node;
pub use path::Walk;

use thiserror::Error;

/// Graph model errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Node handle {0} does not belong to this graph")]
    UnknownNodeId(NodeId),

    #[error("Edge handle {0} does not belong to this graph")]
    UnknownEdgeId(EdgeId),

    #[error("Node {node} is not an endpoint of edge {edge}")]
    NotAnEndpoint { edge: EdgeId, node: NodeId },

    #[error("Walk has {nodes} nodes but {edges} edges")]
    CountMismatch { nodes: usize, edges: usize },

    #[error("Walk discontinuity at position {pos}: edge {edge} does not connect the adjacent nodes")]
    Discontinuity { pos: usize, edge: EdgeId },

    #[error("Walk records latency {recorded} but its edges sum to {actual}")]
    LatencyMismatch { recorded: u64, actual: u64 },
}

pub type GraphResult<T> = Result<T, GraphError>;
