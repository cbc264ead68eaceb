/// Graph import utilities
///
/// Supports loading a graph from an edge list:
/// - CSV records `tail,head,weight`, no header by default
/// - JSON documents with an `edges` array (and optional `nodes`)

use super::{ToolError, ToolResult};
use crate::types::Graph;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Import options
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Skip invalid rows instead of failing
    pub skip_errors: bool,
    /// Treat the first CSV record as a header
    pub has_headers: bool,
}

/// Import statistics
#[derive(Debug, Default, Clone, Serialize)]
pub struct ImportStats {
    pub nodes_imported: usize,
    pub edges_imported: usize,
    pub edges_skipped: usize,
    pub errors: Vec<String>,
}

impl ImportStats {
    fn add_error(&mut self, error: String) {
        tracing::warn!("{}", error);
        self.errors.push(error);
    }
}

/// CSV edge row
#[derive(Debug, Deserialize)]
struct CsvEdge {
    tail: String,
    head: String,
    weight: u64,
}

/// JSON graph format
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct JsonGraph {
    #[serde(default)]
    pub(crate) nodes: Vec<String>,
    pub(crate) edges: Vec<JsonEdge>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct JsonEdge {
    pub(crate) tail: String,
    pub(crate) head: String,
    pub(crate) weight: u64,
}

/// Import a graph from a CSV file
///
/// CSV format:
/// ```csv
/// A,B,5
/// B,C,4
/// ```
pub fn import_from_csv<P: AsRef<Path>>(path: P, options: &ImportOptions) -> ToolResult<(Graph, ImportStats)> {
    let file = File::open(path)?;
    import_from_csv_reader(BufReader::new(file), options)
}

/// Import a graph from any CSV source
pub fn import_from_csv_reader<R: Read>(reader: R, options: &ImportOptions) -> ToolResult<(Graph, ImportStats)> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(options.has_headers)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut graph = Graph::new();
    let mut stats = ImportStats::default();

    for (row_num, result) in csv_reader.deserialize::<CsvEdge>().enumerate() {
        let row = match result {
            Ok(row) => validate_labels(row, row_num),
            Err(e) => Err(ToolError::InvalidFormat(format!("Row {}: {}", row_num, e))),
        };

        match row {
            Ok(row) => {
                graph.add_edge(&row.tail, &row.head, row.weight);
                stats.edges_imported += 1;
            }
            Err(e) if options.skip_errors => {
                stats.edges_skipped += 1;
                stats.add_error(e.to_string());
            }
            Err(e) => return Err(e),
        }
    }

    stats.nodes_imported = graph.node_count();
    tracing::debug!(
        nodes = stats.nodes_imported,
        edges = stats.edges_imported,
        skipped = stats.edges_skipped,
        "CSV import finished"
    );
    Ok((graph, stats))
}

fn validate_labels(row: CsvEdge, row_num: usize) -> ToolResult<CsvEdge> {
    if row.tail.is_empty() || row.head.is_empty() {
        return Err(ToolError::InvalidFormat(format!(
            "Row {}: node labels must be non-empty",
            row_num
        )));
    }
    Ok(row)
}

/// Import a graph from a JSON file
///
/// JSON format:
/// ```json
/// {
///   "nodes": ["A", "B", "C"],
///   "edges": [
///     {"tail": "A", "head": "B", "weight": 5},
///     {"tail": "B", "head": "C", "weight": 4}
///   ]
/// }
/// ```
///
/// `nodes` is optional; it only matters for nodes without edges.
pub fn import_from_json<P: AsRef<Path>>(path: P) -> ToolResult<(Graph, ImportStats)> {
    let file = File::open(path)?;
    import_from_json_reader(BufReader::new(file))
}

/// Import a graph from any JSON source
pub fn import_from_json_reader<R: Read>(reader: R) -> ToolResult<(Graph, ImportStats)> {
    let json_graph: JsonGraph = serde_json::from_reader(reader)?;

    let mut graph = Graph::with_capacity(json_graph.nodes.len(), json_graph.edges.len());
    let mut stats = ImportStats::default();

    for label in &json_graph.nodes {
        if label.is_empty() {
            return Err(ToolError::InvalidFormat("node labels must be non-empty".to_string()));
        }
        graph.add_node(label);
    }

    for (pos, edge) in json_graph.edges.iter().enumerate() {
        if edge.tail.is_empty() || edge.head.is_empty() {
            return Err(ToolError::InvalidFormat(format!(
                "Edge {}: node labels must be non-empty",
                pos
            )));
        }
        graph.add_edge(&edge.tail, &edge.head, edge.weight);
        stats.edges_imported += 1;
    }

    stats.nodes_imported = graph.node_count();
    Ok((graph, stats))
}

/// Load a graph file, choosing the format from its extension
///
/// `.json` files are read as JSON, everything else as CSV.
pub fn load_graph<P: AsRef<Path>>(path: P, options: &ImportOptions) -> ToolResult<(Graph, ImportStats)> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        import_from_json(path)
    } else {
        import_from_csv(path, options)
    }
}
