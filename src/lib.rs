/// Trace Graph
///
/// Walk enumeration, walk latency and cycle-aware shortest paths over a
/// weighted, directed multigraph.
///
/// # Architecture
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │           Trace Graph                            │
/// ├──────────────────────────────────────────────────┤
/// │  ┌────────────────────────────────┐              │
/// │  │   Import / Export (csv, json)  │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Graph Model (arena handles)  │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Walks │ Trace │ Dijkstra     │              │
/// │  └────────────┬───────────────────┘              │
/// │               ↓                                   │
/// │  ┌────────────────────────────────┐              │
/// │  │   Parallel queries (rayon)     │              │
/// │  └────────────────────────────────┘              │
/// └──────────────────────────────────────────────────┘
/// ```
///
/// # Modules
///
/// - `types`: Core data types (NodeId, EdgeId, Node, Edge, Graph, Walk)
/// - `algorithms`: Walk enumeration, walk latency, shortest paths
/// - `tools`: Graph import and export
/// - `config`: Environment configuration for the driver binary

pub mod algorithms;
pub mod config;
pub mod tools;
pub mod types;

// Re-export commonly used types
pub use types::{Edge, EdgeId, Graph, GraphError, GraphResult, Node, NodeId, Walk};

// Re-export algorithm types
pub use algorithms::{
    enumerate, enumerate_with, parallel_shortest_paths, shortest_paths, shortest_paths_with,
    trace_latency, trace_latency_output, traces_by_exact_hops, traces_by_max_hops,
    traces_by_max_latency, AlgorithmError, AlgorithmResult, ScoreTable, ShortestPath,
    ShortestPaths, WalkMode, WalkOptions, NO_SUCH_TRACE,
};

// Re-export tool types
pub use tools::{
    export_to_csv, export_to_json, import_from_csv, import_from_json, load_graph, ExportOptions,
    ImportOptions, ImportStats, ToolError, ToolResult,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
