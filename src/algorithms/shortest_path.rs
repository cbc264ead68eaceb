/// Shortest path algorithms
///
/// Single-source Dijkstra over an indexed min-heap, producing the distance
/// and path to every node. The distance from the source to itself is not 0:
/// it is the weight of the shortest non-empty cycle through the source, and
/// absent when no such cycle exists.

use super::heap::IndexedMinHeap;
use super::{AlgorithmError, AlgorithmResult};
use crate::types::{EdgeId, Graph, NodeId};
use serde::Serialize;
use std::collections::BTreeMap;

/// Score of anything not yet bounded
pub const INFINITY: u64 = u64::MAX;

/// Per-run scratch scores, kept beside the graph rather than inside it
///
/// - heap-score (per node): best known lower bound on the node's distance,
///   used as the heap key
/// - greedy-score (per edge): distance of the edge's tail plus its weight
///
/// A table can be reused across runs; every run resets it first.
#[derive(Debug, Clone, Default)]
pub struct ScoreTable {
    heap_scores: Vec<u64>,
    greedy_scores: Vec<u64>,
}

impl ScoreTable {
    /// Create a table sized for `graph`, with every score at [`INFINITY`]
    pub fn new(graph: &Graph) -> Self {
        Self {
            heap_scores: vec![INFINITY; graph.node_count()],
            greedy_scores: vec![INFINITY; graph.edge_count()],
        }
    }

    /// Restore every heap-score and greedy-score to [`INFINITY`]
    pub fn reset(&mut self) {
        self.heap_scores.fill(INFINITY);
        self.greedy_scores.fill(INFINITY);
    }

    pub fn heap_score(&self, node: NodeId) -> u64 {
        self.heap_scores.get(node.index()).copied().unwrap_or(INFINITY)
    }

    pub fn greedy_score(&self, edge: EdgeId) -> u64 {
        self.greedy_scores.get(edge.index()).copied().unwrap_or(INFINITY)
    }

    fn prepare(&mut self, graph: &Graph) {
        self.heap_scores.resize(graph.node_count(), INFINITY);
        self.greedy_scores.resize(graph.edge_count(), INFINITY);
        self.reset();
    }

    /// Record `score` for `edge` and lower its head's heap-score; returns the
    /// head's new heap-score.
    fn relax(&mut self, edge: EdgeId, head: NodeId, score: u64) -> u64 {
        self.greedy_scores[edge.index()] = score;
        let bound = &mut self.heap_scores[head.index()];
        *bound = (*bound).min(score);
        *bound
    }
}

/// Progress of a node during one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeStatus {
    /// No distance yet
    Unseen,
    /// The source before its cycle distance is known. Its outgoing edges
    /// already count, starting every path at distance 0.
    Origin,
    /// Distance finalized
    Processed,
}

/// Shortest path from the source to one target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    pub source: String,
    pub target: String,
    /// Total weight of `path`
    pub distance: u64,
    /// Node labels from source to target, both included
    pub path: Vec<String>,
}

impl ShortestPath {
    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Shortest paths from one source to every node of the graph
///
/// Every node has an entry; `None` marks a node with no path from the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub source: String,
    paths: BTreeMap<String, Option<ShortestPath>>,
}

impl ShortestPaths {
    /// Shortest path to `target`, if `target` is reachable
    pub fn get(&self, target: &str) -> Option<&ShortestPath> {
        self.paths.get(target).and_then(Option::as_ref)
    }

    pub fn distance(&self, target: &str) -> Option<u64> {
        self.get(target).map(|p| p.distance)
    }

    pub fn path(&self, target: &str) -> Option<&[String]> {
        self.get(target).map(|p| p.path.as_slice())
    }

    /// Whether `target` is a node covered by this result
    pub fn covers(&self, target: &str) -> bool {
        self.paths.contains_key(target)
    }

    /// All entries, ordered by target label
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ShortestPath>)> {
        self.paths.iter().map(|(label, p)| (label.as_str(), p.as_ref()))
    }

    /// Entries with a path
    pub fn reachable(&self) -> impl Iterator<Item = &ShortestPath> {
        self.paths.values().flatten()
    }

    /// Labels of nodes without a path
    pub fn unreachable(&self) -> impl Iterator<Item = &str> {
        self.paths
            .iter()
            .filter(|(_, p)| p.is_none())
            .map(|(label, _)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Find the shortest paths from `source` to every node
///
/// # Returns
/// * `Ok(ShortestPaths)` - one entry per node of the graph
/// * `Err(AlgorithmError::UnknownNode)` - `source` is not in the graph
pub fn shortest_paths(graph: &Graph, source: &str) -> AlgorithmResult<ShortestPaths> {
    let mut scores = ScoreTable::new(graph);
    shortest_paths_with(graph, source, &mut scores)
}

/// Same as [`shortest_paths`], reusing a caller-owned [`ScoreTable`]
pub fn shortest_paths_with(
    graph: &Graph,
    source: &str,
    scores: &mut ScoreTable,
) -> AlgorithmResult<ShortestPaths> {
    let source_id = graph
        .node_id(source)
        .ok_or_else(|| AlgorithmError::UnknownNode(source.to_string()))?;

    let settled = dijkstra(graph, source_id, scores);

    let mut paths = BTreeMap::new();
    for node in graph.nodes() {
        let entry = match settled[node.id.index()] {
            Some((distance, _)) => Some(ShortestPath {
                source: source.to_string(),
                target: node.label.clone(),
                distance,
                path: reconstruct_path(graph, source_id, node.id, &settled)?
                    .into_iter()
                    .map(|id| graph.label(id).to_string())
                    .collect(),
            }),
            None => None,
        };
        paths.insert(node.label.clone(), entry);
    }

    let result = ShortestPaths {
        source: source.to_string(),
        paths,
    };
    tracing::debug!(
        source,
        reachable = result.reachable().count(),
        unreachable = result.unreachable().count(),
        "shortest paths computed"
    );
    Ok(result)
}

/// Dijkstra's algorithm with a cycle-aware source
///
/// Returns, per node, its finalized distance and the edge it was reached by.
fn dijkstra(graph: &Graph, source: NodeId, scores: &mut ScoreTable) -> Vec<Option<(u64, EdgeId)>> {
    let n = graph.node_count();
    scores.prepare(graph);

    let mut status = vec![NodeStatus::Unseen; n];
    status[source.index()] = NodeStatus::Origin;
    let mut settled: Vec<Option<(u64, EdgeId)>> = vec![None; n];

    // Paths leave the source at distance 0
    for edge in graph.outgoing(source) {
        scores.relax(edge.id, edge.head, edge.weight);
    }

    let mut heap = IndexedMinHeap::with_capacity(n);
    for node in graph.nodes() {
        heap.push(node.id, scores.heap_score(node.id));
    }

    while let Some((min_node, score)) = heap.pop() {
        // Everything still queued is unreachable
        if score == INFINITY {
            break;
        }

        let Some((via, tail)) = find_min_edge(graph, min_node, source, &status, scores) else {
            tracing::trace!(node = graph.label(min_node), "no eligible incoming edge");
            continue;
        };

        let base = if tail == source {
            0
        } else {
            settled[tail.index()].map_or(0, |(d, _)| d)
        };
        let distance = base.saturating_add(graph.edges()[via.index()].weight);
        settled[min_node.index()] = Some((distance, via));
        status[min_node.index()] = NodeStatus::Processed;
        tracing::trace!(node = graph.label(min_node), distance, "finalized");

        // The source's outgoing edges already carry their origin scores
        if min_node == source {
            continue;
        }

        for edge in graph.outgoing(min_node) {
            if status[edge.head.index()] == NodeStatus::Processed {
                continue;
            }
            let bound = scores.relax(edge.id, edge.head, distance.saturating_add(edge.weight));
            heap.decrease_key(edge.head, bound);
        }
    }

    settled
}

/// Incoming edge of `head` with the lowest greedy-score among those whose
/// tail already has a usable distance (processed, or the source as origin).
fn find_min_edge(
    graph: &Graph,
    head: NodeId,
    source: NodeId,
    status: &[NodeStatus],
    scores: &ScoreTable,
) -> Option<(EdgeId, NodeId)> {
    graph
        .incoming(head)
        .filter(|edge| edge.tail == source || status[edge.tail.index()] == NodeStatus::Processed)
        .min_by_key(|edge| scores.greedy_score(edge.id))
        .map(|edge| (edge.id, edge.tail))
}

/// Walk predecessor edges back from `target` until the source is reached
fn reconstruct_path(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
    settled: &[Option<(u64, EdgeId)>],
) -> AlgorithmResult<Vec<NodeId>> {
    let mut path = vec![target];
    let mut current = target;

    while let Some((_, via)) = settled[current.index()] {
        let tail = graph.edge(via)?.tail;
        path.push(tail);
        if tail == source {
            break;
        }
        current = tail;
    }

    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    // A -> B -> D
    // |    |
    // v    v
    // C -> E -> A
    fn setup_test_graph() -> Graph {
        Graph::from_edges([
            ("A", "B", 1),
            ("A", "C", 4),
            ("B", "D", 2),
            ("B", "E", 6),
            ("C", "E", 1),
            ("E", "A", 3),
        ])
    }

    #[test]
    fn test_shortest_paths_from_a() {
        let graph = setup_test_graph();
        let result = shortest_paths(&graph, "A").unwrap();

        assert_eq!(result.len(), 5);
        assert_eq!(result.distance("B"), Some(1));
        assert_eq!(result.distance("D"), Some(3));
        assert_eq!(result.distance("E"), Some(5));
        assert_eq!(result.path("E").unwrap(), &["A", "C", "E"]);
        // A -> C -> E -> A
        assert_eq!(result.distance("A"), Some(8));
        assert_eq!(result.path("A").unwrap(), &["A", "C", "E", "A"]);
    }

    #[test]
    fn test_no_cycle_means_no_self_distance() {
        let graph = setup_test_graph();
        let result = shortest_paths(&graph, "D").unwrap();

        assert!(result.covers("D"));
        assert_eq!(result.distance("D"), None);
        assert_eq!(result.reachable().count(), 0);
        assert_eq!(result.unreachable().count(), 5);
    }

    #[test]
    fn test_self_loop_is_the_cycle() {
        let graph = Graph::from_edges([("A", "A", 2), ("A", "B", 1), ("B", "A", 5)]);
        let result = shortest_paths(&graph, "A").unwrap();

        assert_eq!(result.distance("A"), Some(2));
        assert_eq!(result.path("A").unwrap(), &["A", "A"]);
        assert_eq!(result.distance("B"), Some(1));
    }

    #[test]
    fn test_paths_after_short_cycle_start_at_origin() {
        // The cycle S-Y-S (2) closes before X (10) is finalized; X must
        // still be reached directly.
        let graph = Graph::from_edges([("S", "X", 10), ("S", "Y", 1), ("Y", "S", 1)]);
        let result = shortest_paths(&graph, "S").unwrap();

        assert_eq!(result.distance("S"), Some(2));
        assert_eq!(result.distance("X"), Some(10));
        assert_eq!(result.path("X").unwrap(), &["S", "X"]);
    }

    #[test]
    fn test_parallel_edges_use_lightest() {
        let graph = Graph::from_edges([("A", "B", 7), ("A", "B", 3), ("B", "A", 1)]);
        let result = shortest_paths(&graph, "A").unwrap();

        assert_eq!(result.distance("B"), Some(3));
        assert_eq!(result.distance("A"), Some(4));
    }

    #[test]
    fn test_zero_weight_edges() {
        let graph = Graph::from_edges([("A", "B", 0), ("B", "C", 0), ("C", "A", 0)]);
        let result = shortest_paths(&graph, "A").unwrap();

        assert_eq!(result.distance("C"), Some(0));
        assert_eq!(result.distance("A"), Some(0));
        assert_eq!(result.path("A").unwrap(), &["A", "B", "C", "A"]);
    }

    #[test]
    fn test_unknown_source() {
        let graph = setup_test_graph();
        let result = shortest_paths(&graph, "Z");
        assert!(matches!(result, Err(AlgorithmError::UnknownNode(label)) if label == "Z"));
    }

    #[test]
    fn test_score_table_reuse_is_idempotent() {
        let graph = setup_test_graph();
        let mut scores = ScoreTable::new(&graph);

        let first = shortest_paths_with(&graph, "A", &mut scores).unwrap();
        let other = shortest_paths_with(&graph, "C", &mut scores).unwrap();
        let again = shortest_paths_with(&graph, "A", &mut scores).unwrap();

        assert_eq!(first, again);
        assert_ne!(first, other);
    }

    #[test]
    fn test_score_table_reset() {
        let graph = setup_test_graph();
        let mut scores = ScoreTable::new(&graph);
        shortest_paths_with(&graph, "A", &mut scores).unwrap();

        let b = graph.node_id("B").unwrap();
        assert_eq!(scores.heap_score(b), 1);

        scores.reset();
        assert!(graph.nodes().iter().all(|n| scores.heap_score(n.id) == INFINITY));
        assert!(graph.edges().iter().all(|e| scores.greedy_score(e.id) == INFINITY));
    }

    #[test]
    fn test_path_weights_match_distance() {
        let graph = setup_test_graph();
        for source in ["A", "B", "C", "E"] {
            let result = shortest_paths(&graph, source).unwrap();
            for path in result.reachable() {
                let weight = crate::algorithms::trace_latency(&graph, &path.path)
                    .unwrap()
                    .unwrap();
                assert_eq!(weight, path.distance, "{} -> {}", source, path.target);
                assert_eq!(path.hops(), path.path.len() - 1);
            }
        }
    }
}
