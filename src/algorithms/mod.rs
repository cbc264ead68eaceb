/// Graph algorithms module
///
/// This module implements the three query families over a [`Graph`]:
/// bounded walk enumeration, literal walk latency, and single-source
/// shortest paths with cycle-aware self distances.
///
/// [`Graph`]: crate::types::Graph

pub mod heap;
pub mod parallel;
pub mod shortest_path;
pub mod trace;
pub mod walks;

pub use parallel::{parallel_shortest_paths, parallel_traces_by_max_hops};
pub use shortest_path::{shortest_paths, shortest_paths_with, ScoreTable, ShortestPath, ShortestPaths};
pub use trace::{trace_latency, trace_latency_output, NO_SUCH_TRACE};
pub use walks::{
    enumerate, enumerate_with, traces_by_condition, traces_by_exact_hops, traces_by_max_hops,
    traces_by_max_latency, TraceStatus, WalkMode, WalkOptions,
};

use crate::types::GraphError;
use thiserror::Error;

/// Algorithm errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmError {
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    #[error("Walk must contain at least one node")]
    EmptyWalk,

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type AlgorithmResult<T> = Result<T, AlgorithmError>;
