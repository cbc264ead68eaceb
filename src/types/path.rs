use super::graph::Graph;
use super::ids::{EdgeId, NodeId};
use super::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Walk represents a walk in the graph
///
/// A walk consists of an alternating sequence of nodes and edges:
/// (v1) -[e1]-> (v2) -[e2]-> (v3) ... -[en]-> (vn+1)
///
/// Invariants:
/// - labels.len() = edges.len() + 1
/// - edges[i] leads from labels[i] to labels[i+1]
/// - latency is the sum of the edge weights
///
/// Nodes and edges may repeat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Walk {
    /// Node labels in traversal order
    pub labels: Vec<String>,

    /// Edges traversed (in order)
    pub edges: Vec<EdgeId>,

    /// Cumulative edge weight
    pub latency: u64,
}

impl Walk {
    /// Materialize a walk from node and edge handles
    pub fn from_handles(graph: &Graph, nodes: &[NodeId], edges: Vec<EdgeId>, latency: u64) -> Self {
        Self {
            labels: nodes.iter().map(|&n| graph.label(n).to_string()).collect(),
            edges,
            latency,
        }
    }

    /// Number of edges (hops)
    pub fn hops(&self) -> usize {
        self.edges.len()
    }

    pub fn start(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }

    pub fn end(&self) -> Option<&str> {
        self.labels.last().map(String::as_str)
    }

    /// Check the walk invariants against the graph it came from
    pub fn validate(&self, graph: &Graph) -> GraphResult<()> {
        if self.labels.len() != self.edges.len() + 1 {
            return Err(GraphError::CountMismatch {
                nodes: self.labels.len(),
                edges: self.edges.len(),
            });
        }

        let mut latency = 0u64;
        for (pos, &id) in self.edges.iter().enumerate() {
            let edge = graph.edge(id)?;
            if graph.label(edge.tail) != self.labels[pos]
                || graph.label(edge.head) != self.labels[pos + 1]
            {
                return Err(GraphError::Discontinuity { pos, edge: id });
            }
            latency = latency.saturating_add(edge.weight);
        }

        if latency != self.latency {
            return Err(GraphError::LatencyMismatch {
                recorded: self.latency,
                actual: latency,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Walk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.labels.join("-"))
    }
}
