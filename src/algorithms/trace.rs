/// Literal walk latency
///
/// Checks that a given sequence of node labels is a walk of the graph and
/// sums the weights of its edges.

use super::{AlgorithmError, AlgorithmResult};
use crate::types::Graph;

/// Text rendered for a walk that does not exist in the graph
pub const NO_SUCH_TRACE: &str = "NO SUCH TRACE";

/// Compute the latency of the walk `labels`
///
/// At each step the first outgoing edge (in insertion order) whose head
/// carries the next label is taken.
///
/// # Returns
/// * `Ok(Some(latency))` - the walk exists; a single known label gives 0
/// * `Ok(None)` - the first label is unknown or some step has no edge
/// * `Err(AlgorithmError::EmptyWalk)` - `labels` is empty
pub fn trace_latency<S: AsRef<str>>(graph: &Graph, labels: &[S]) -> AlgorithmResult<Option<u64>> {
    let (first, rest) = labels.split_first().ok_or(AlgorithmError::EmptyWalk)?;

    let Some(mut current) = graph.node_id(first.as_ref()) else {
        return Ok(None);
    };

    let mut latency = 0u64;
    for next in rest {
        let next = next.as_ref();
        let step = graph
            .outgoing(current)
            .find(|edge| graph.label(edge.head) == next);

        match step {
            Some(edge) => {
                latency = latency.saturating_add(edge.weight);
                current = edge.head;
            }
            None => {
                tracing::trace!(from = graph.label(current), to = next, "no edge for walk step");
                return Ok(None);
            }
        }
    }

    Ok(Some(latency))
}

/// Render [`trace_latency`] as text, using [`NO_SUCH_TRACE`] for absent walks
pub fn trace_latency_output<S: AsRef<str>>(graph: &Graph, labels: &[S]) -> AlgorithmResult<String> {
    Ok(trace_latency(graph, labels)?
        .map(|latency| latency.to_string())
        .unwrap_or_else(|| NO_SUCH_TRACE.to_string()))
}
