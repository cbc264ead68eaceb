use super::ids::{EdgeId, NodeId};
use super::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge in the graph
///
/// Represents a directed, weighted edge with:
/// - Stable handle (EdgeId)
/// - Tail node (where the edge starts)
/// - Head node (where the edge ends)
/// - Non-negative weight (latency)
///
/// Several edges may share the same (tail, head) pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edge {
    /// Stable handle
    pub id: EdgeId,

    /// Start node (source)
    pub tail: NodeId,

    /// End node (target)
    pub head: NodeId,

    /// Weight of traversing the edge
    pub weight: u64,
}

impl Edge {
    /// Create a new edge
    pub fn new(id: EdgeId, tail: NodeId, head: NodeId, weight: u64) -> Self {
        Self {
            id,
            tail,
            head,
            weight,
        }
    }

    /// Get the endpoint opposite to `node`
    ///
    /// # Errors
    /// Returns [`GraphError::NotAnEndpoint`] if `node` is neither the tail
    /// nor the head of this edge
    pub fn opposite(&self, node: NodeId) -> GraphResult<NodeId> {
        if node == self.tail {
            Ok(self.head)
        } else if node == self.head {
            Ok(self.tail)
        } else {
            Err(GraphError::NotAnEndpoint {
                edge: self.id,
                node,
            })
        }
    }

    /// Check if this edge is a self-loop
    pub fn is_self_loop(&self) -> bool {
        self.tail == self.head
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} --({})--> {}", self.tail, self.weight, self.head)
    }
}
