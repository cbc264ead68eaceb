use super::ids::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// Node (vertex) in the graph
///
/// Represents a graph node with:
/// - Stable handle (NodeId)
/// - Unique label (e.g., "A")
/// - Handles of the edges leaving it (tail = this node)
/// - Handles of the edges entering it (head = this node)
///
/// Edge lists are kept in insertion order and are only written by the owning
/// [`Graph`](super::Graph), which keeps them consistent with its edge arena.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    /// Stable handle
    pub id: NodeId,

    /// Unique label
    pub label: String,

    /// Edges whose tail is this node
    outgoing: Vec<EdgeId>,

    /// Edges whose head is this node
    incoming: Vec<EdgeId>,
}

impl Node {
    /// Create a node with no incident edges
    pub fn new(id: NodeId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Handles of the edges leaving this node
    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// Handles of the edges entering this node
    pub fn incoming(&self) -> &[EdgeId] {
        &self.incoming
    }

    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    pub fn in_degree(&self) -> usize {
        self.incoming.len()
    }

    pub(crate) fn attach_outgoing(&mut self, edge: EdgeId) {
        self.outgoing.push(edge);
    }

    pub(crate) fn attach_incoming(&mut self, edge: EdgeId) {
        self.incoming.push(edge);
    }
}
