/// Parallel graph queries
///
/// This module runs independent queries against one shared graph on the
/// rayon thread pool. Queries only borrow the graph; each worker owns its
/// own scratch state.

use super::shortest_path::{shortest_paths_with, ScoreTable, ShortestPaths};
use super::walks::traces_by_max_hops;
use super::AlgorithmResult;
use crate::types::{Graph, Walk};
use rayon::prelude::*;

/// Parallel single-source shortest paths
///
/// Computes [`ShortestPaths`] from every label in `sources`, one score table
/// per worker.
///
/// # Returns
/// * Results in the same order as `sources`
/// * The first `UnknownNode` error if any source is absent
pub fn parallel_shortest_paths<S>(graph: &Graph, sources: &[S]) -> AlgorithmResult<Vec<ShortestPaths>>
where
    S: AsRef<str> + Sync,
{
    sources
        .par_iter()
        .map_init(
            || ScoreTable::new(graph),
            |scores, source| shortest_paths_with(graph, source.as_ref(), scores),
        )
        .collect()
}

/// Parallel max-hops walk enumeration
///
/// Runs `traces_by_max_hops` for each `(start, end)` pair.
///
/// # Returns
/// * One walk list per pair, in the same order as `pairs`
pub fn parallel_traces_by_max_hops<S>(
    graph: &Graph,
    pairs: &[(S, S)],
    max_hops: usize,
) -> AlgorithmResult<Vec<Vec<Walk>>>
where
    S: AsRef<str> + Sync,
{
    pairs
        .par_iter()
        .map(|(start, end)| traces_by_max_hops(graph, start.as_ref(), end.as_ref(), max_hops))
        .collect()
}
