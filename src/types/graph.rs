use super::edge::Edge;
use super::ids::{EdgeId, NodeId};
use super::node::Node;
use super::{GraphError, GraphResult};
use std::collections::HashMap;
use std::fmt::Write as _;

/// Weighted, directed multigraph stored as adjacency lists
///
/// - `nodes` is an arena indexed by [`NodeId`]
/// - `edges` is an arena indexed by [`EdgeId`], in insertion order
/// - every edge handle appears in exactly one outgoing list (its tail's)
///   and exactly one incoming list (its head's)
/// - `index` maps each unique label to its node
///
/// Queries only ever borrow the graph immutably; per-query scratch state
/// lives in side tables owned by the query.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<String, NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_count),
            edges: Vec::with_capacity(edge_count),
            index: HashMap::with_capacity(node_count),
        }
    }

    /// Build a graph from `(tail, head, weight)` triples, creating nodes on
    /// first sight.
    pub fn from_edges<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S, u64)>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for (tail, head, weight) in edges {
            graph.add_edge(tail.as_ref(), head.as_ref(), weight);
        }
        graph
    }

    /// Register a node, returning the existing handle if the label is known.
    pub fn add_node(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(Node::new(id, label));
        self.index.insert(label.to_string(), id);
        id
    }

    /// Add a directed edge between two labels, creating missing nodes.
    pub fn add_edge(&mut self, tail: &str, head: &str, weight: u64) -> EdgeId {
        let tail = self.add_node(tail);
        let head = self.add_node(head);
        self.link(tail, head, weight)
    }

    /// Add a directed edge between two existing nodes.
    pub fn add_edge_between(
        &mut self,
        tail: NodeId,
        head: NodeId,
        weight: u64,
    ) -> GraphResult<EdgeId> {
        self.node(tail)?;
        self.node(head)?;
        Ok(self.link(tail, head, weight))
    }

    fn link(&mut self, tail: NodeId, head: NodeId, weight: u64) -> EdgeId {
        let id = EdgeId::from_index(self.edges.len());
        self.edges.push(Edge::new(id, tail, head, weight));
        self.nodes[tail.index()].attach_outgoing(id);
        self.nodes[head.index()].attach_incoming(id);
        id
    }

    /// Look up a node handle by label.
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Look up a node handle by label, failing on unknown labels.
    pub fn require(&self, label: &str) -> GraphResult<NodeId> {
        self.node_id(label)
            .ok_or_else(|| GraphError::UnknownNode(label.to_string()))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn node(&self, id: NodeId) -> GraphResult<&Node> {
        self.nodes.get(id.index()).ok_or(GraphError::UnknownNodeId(id))
    }

    pub fn edge(&self, id: EdgeId) -> GraphResult<&Edge> {
        self.edges.get(id.index()).ok_or(GraphError::UnknownEdgeId(id))
    }

    /// Label of a node issued by this graph.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this graph.
    pub fn label(&self, id: NodeId) -> &str {
        &self.nodes[id.index()].label
    }

    /// Edges leaving `id`, in insertion order.
    pub fn outgoing(&self, id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.nodes
            .get(id.index())
            .map(|n| n.outgoing())
            .unwrap_or(&[])
            .iter()
            .map(move |e| &self.edges[e.index()])
    }

    /// Edges entering `id`, in insertion order.
    pub fn incoming(&self, id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        self.nodes
            .get(id.index())
            .map(|n| n.incoming())
            .unwrap_or(&[])
            .iter()
            .map(move |e| &self.edges[e.index()])
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Render the adjacency lists, one node per line: `A: B(5) D(5)`.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            out.push_str(&node.label);
            out.push(':');
            for edge in self.outgoing(node.id) {
                let _ = write!(out, " {}({})", self.label(edge.head), edge.weight);
            }
            out.push('\n');
        }
        out
    }

    /// Emit the adjacency lists through `tracing` at debug level.
    pub fn log_summary(&self) {
        tracing::debug!(
            nodes = self.node_count(),
            edges = self.edge_count(),
            "graph loaded"
        );
        for line in self.describe().lines() {
            tracing::debug!("{}", line);
        }
    }
}
