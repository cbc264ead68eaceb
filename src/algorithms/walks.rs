/// Bounded walk enumeration
///
/// Enumerates every walk between two nodes that satisfies a hop or latency
/// bound. Walks may revisit nodes and edges, which is what makes round trips
/// such as C -> ... -> C enumerable.

use super::{AlgorithmError, AlgorithmResult};
use crate::types::{EdgeId, Graph, NodeId, Walk};

/// State of one partial walk on the search stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceStatus {
    /// Node the walk currently ends at
    pub node: NodeId,
    /// Nodes visited so far (in order)
    pub nodes: Vec<NodeId>,
    /// Edges traversed so far (in order)
    pub edges: Vec<EdgeId>,
    /// Cumulative weight of `edges`
    pub latency: u64,
}

impl TraceStatus {
    /// Create the zero-hop state at `node`
    pub fn start_from(node: NodeId) -> Self {
        Self {
            node,
            nodes: vec![node],
            edges: Vec::new(),
            latency: 0,
        }
    }

    /// Extend the walk by one edge
    pub fn extend(&self, edge: EdgeId, head: NodeId, weight: u64) -> Self {
        let mut next = self.clone();
        next.node = head;
        next.nodes.push(head);
        next.edges.push(edge);
        next.latency = next.latency.saturating_add(weight);
        next
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.edges.len()
    }
}

/// Bound applied to an enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkMode {
    /// Walks with exactly N edges
    ExactHops(usize),
    /// Walks with 1..=N edges
    MaxHops(usize),
    /// Walks with positive latency, expanded only while latency stays below N
    MaxLatency(u64),
}

impl WalkMode {
    /// Whether the search should keep expanding from `status`
    pub fn keep_traversing(&self, status: &TraceStatus) -> bool {
        match *self {
            WalkMode::ExactHops(n) | WalkMode::MaxHops(n) => status.hops() <= n,
            WalkMode::MaxLatency(n) => status.latency < n,
        }
    }

    /// Whether `status` is an acceptable walk (ignoring where it ends)
    pub fn accepts(&self, status: &TraceStatus) -> bool {
        match *self {
            WalkMode::ExactHops(n) => status.hops() == n,
            WalkMode::MaxHops(n) => status.hops() > 0 && status.hops() <= n,
            WalkMode::MaxLatency(n) => status.latency > 0 && status.latency <= n,
        }
    }
}

/// Enumeration limits
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Maximum number of walks to return (0 = unlimited)
    pub max_walks: usize,
    /// Never expand a walk beyond this many edges
    ///
    /// Latency bounds alone do not terminate over zero-weight cycles.
    pub max_depth: Option<usize>,
}

/// Enumerate all walks from `start` to `end` satisfying `mode`
///
/// # Returns
/// * `Ok(walks)` - every matching walk; empty if `end` is not in the graph
/// * `Err(AlgorithmError::UnknownNode)` - `start` is not in the graph
pub fn enumerate(graph: &Graph, start: &str, end: &str, mode: WalkMode) -> AlgorithmResult<Vec<Walk>> {
    enumerate_with(graph, start, end, mode, &WalkOptions::default())
}

/// Enumerate walks with explicit [`WalkOptions`]
pub fn enumerate_with(
    graph: &Graph,
    start: &str,
    end: &str,
    mode: WalkMode,
    options: &WalkOptions,
) -> AlgorithmResult<Vec<Walk>> {
    traces_by_condition(
        graph,
        start,
        end,
        |s| mode.keep_traversing(s),
        |s| mode.accepts(s),
        options,
    )
}

pub fn traces_by_exact_hops(graph: &Graph, start: &str, end: &str, exact_hops: usize) -> AlgorithmResult<Vec<Walk>> {
    enumerate(graph, start, end, WalkMode::ExactHops(exact_hops))
}

pub fn traces_by_max_hops(graph: &Graph, start: &str, end: &str, max_hops: usize) -> AlgorithmResult<Vec<Walk>> {
    enumerate(graph, start, end, WalkMode::MaxHops(max_hops))
}

pub fn traces_by_max_latency(graph: &Graph, start: &str, end: &str, max_latency: u64) -> AlgorithmResult<Vec<Walk>> {
    enumerate(graph, start, end, WalkMode::MaxLatency(max_latency))
}

/// Enumerate walks from `start` to `end` under arbitrary predicates
///
/// Depth-first over an explicit stack. At each popped state for which
/// `keep_traversing` holds, the walk is recorded if it ends at `end` and
/// `add_trace` holds, then one successor per outgoing edge is pushed.
/// Termination relies on the predicates (or `options.max_depth`) rejecting
/// every sufficiently long walk.
pub fn traces_by_condition<K, A>(
    graph: &Graph,
    start: &str,
    end: &str,
    keep_traversing: K,
    add_trace: A,
    options: &WalkOptions,
) -> AlgorithmResult<Vec<Walk>>
where
    K: Fn(&TraceStatus) -> bool,
    A: Fn(&TraceStatus) -> bool,
{
    let start_id = graph
        .node_id(start)
        .ok_or_else(|| AlgorithmError::UnknownNode(start.to_string()))?;

    let Some(end_id) = graph.node_id(end) else {
        tracing::debug!(start, end, "end node absent, no walk can terminate there");
        return Ok(Vec::new());
    };

    let mut results = Vec::new();
    let mut stack = vec![TraceStatus::start_from(start_id)];
    let mut expanded = 0usize;

    while let Some(status) = stack.pop() {
        if !keep_traversing(&status) {
            continue;
        }
        expanded += 1;

        if status.node == end_id && add_trace(&status) {
            results.push(Walk::from_handles(
                graph,
                &status.nodes,
                status.edges.clone(),
                status.latency,
            ));

            if options.max_walks > 0 && results.len() >= options.max_walks {
                break;
            }
        }

        if options.max_depth.is_some_and(|depth| status.hops() >= depth) {
            continue;
        }

        for edge in graph.outgoing(status.node) {
            stack.push(status.extend(edge.id, edge.head, edge.weight));
        }
    }

    tracing::debug!(start, end, expanded, walks = results.len(), "walk enumeration finished");
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    // A -> B -> D
    // |    |
    // v    v
    // C -> E
    fn setup_test_graph() -> Graph {
        Graph::from_edges([
            ("A", "B", 1),
            ("A", "C", 2),
            ("B", "D", 3),
            ("B", "E", 4),
            ("C", "E", 5),
        ])
    }

    fn labels(walks: &[Walk]) -> Vec<String> {
        let mut out: Vec<String> = walks.iter().map(|w| w.to_string()).collect();
        out.sort();
        out
    }

    #[test]
    fn test_exact_hops() {
        let graph = setup_test_graph();
        let walks = traces_by_exact_hops(&graph, "A", "E", 2).unwrap();
        assert_eq!(labels(&walks), vec!["A-B-E", "A-C-E"]);
        assert!(walks.iter().all(|w| w.hops() == 2));
    }

    #[test]
    fn test_max_hops_excludes_empty_walk() {
        let graph = Graph::from_edges([("A", "A", 1)]);
        let walks = traces_by_max_hops(&graph, "A", "A", 2).unwrap();
        assert_eq!(labels(&walks), vec!["A-A", "A-A-A"]);
    }

    #[test]
    fn test_exact_zero_hops_yields_start() {
        let graph = setup_test_graph();
        let walks = traces_by_exact_hops(&graph, "A", "A", 0).unwrap();
        assert_eq!(labels(&walks), vec!["A"]);
        assert_eq!(walks[0].latency, 0);
    }

    #[test]
    fn test_max_latency_stops_at_bound() {
        let graph = setup_test_graph();
        // A-B-E = 5, A-C-E = 7
        let walks = traces_by_max_latency(&graph, "A", "E", 5).unwrap();
        assert!(walks.is_empty());

        let walks = traces_by_max_latency(&graph, "A", "E", 7).unwrap();
        assert_eq!(labels(&walks), vec!["A-B-E"]);

        let walks = traces_by_max_latency(&graph, "A", "E", 8).unwrap();
        assert_eq!(labels(&walks), vec!["A-B-E", "A-C-E"]);
    }

    #[test]
    fn test_zero_latency_bound_yields_nothing() {
        let graph = setup_test_graph();
        let walks = traces_by_max_latency(&graph, "A", "B", 0).unwrap();
        assert!(walks.is_empty());
    }

    #[test]
    fn test_unknown_start() {
        let graph = setup_test_graph();
        let result = traces_by_max_hops(&graph, "Z", "A", 3);
        assert!(matches!(result, Err(AlgorithmError::UnknownNode(label)) if label == "Z"));
    }

    #[test]
    fn test_unknown_end_is_empty() {
        let graph = setup_test_graph();
        let walks = traces_by_max_hops(&graph, "A", "Z", 3).unwrap();
        assert!(walks.is_empty());
    }

    #[test]
    fn test_max_walks_limit() {
        let graph = Graph::from_edges([("A", "A", 1)]);
        let options = WalkOptions {
            max_walks: 3,
            max_depth: None,
        };
        let walks = enumerate_with(&graph, "A", "A", WalkMode::MaxHops(10), &options).unwrap();
        assert_eq!(walks.len(), 3);
    }

    #[test]
    fn test_max_depth_bounds_zero_weight_cycle() {
        let graph = Graph::from_edges([("A", "B", 0), ("B", "A", 0), ("A", "C", 1)]);
        let options = WalkOptions {
            max_walks: 0,
            max_depth: Some(3),
        };
        let walks = enumerate_with(&graph, "A", "C", WalkMode::MaxLatency(5), &options).unwrap();
        // A-C and A-B-A-C
        assert_eq!(labels(&walks), vec!["A-B-A-C", "A-C"]);
    }

    #[test]
    fn test_custom_predicates() {
        let graph = setup_test_graph();
        let walks = traces_by_condition(
            &graph,
            "A",
            "E",
            |s| s.hops() <= 2,
            |s| s.latency % 2 == 1,
            &WalkOptions::default(),
        )
        .unwrap();
        assert_eq!(labels(&walks), vec!["A-B-E", "A-C-E"]);
    }

    #[test]
    fn test_walks_record_latency() {
        let graph = setup_test_graph();
        let walks = traces_by_max_hops(&graph, "A", "D", 3).unwrap();
        assert_eq!(walks.len(), 1);
        assert_eq!(walks[0].latency, 4);
        assert!(walks[0].validate(&graph).is_ok());
    }
}
