/// Data export utilities
///
/// Supports exporting to:
/// - CSV edge lists (the import format)
/// - JSON graph documents
/// - JSON shortest-path results

use super::import::{JsonEdge, JsonGraph};
use super::ToolResult;
use crate::algorithms::ShortestPaths;
use crate::types::Graph;
use serde::Serialize;
use std::io::Write;

/// Export options
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Pretty-print JSON output
    pub pretty_json: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

/// Export every edge as a `tail,head,weight` record, returning the count
pub fn export_to_csv<W: Write>(graph: &Graph, writer: W) -> ToolResult<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for edge in graph.edges() {
        let weight = edge.weight.to_string();
        csv_writer.write_record([graph.label(edge.tail), graph.label(edge.head), weight.as_str()])?;
    }

    csv_writer.flush()?;
    Ok(graph.edge_count())
}

/// Export the graph as a JSON document readable by `import_from_json`
pub fn export_to_json<W: Write>(graph: &Graph, writer: W, options: &ExportOptions) -> ToolResult<()> {
    let document = JsonGraph {
        nodes: graph.nodes().iter().map(|n| n.label.clone()).collect(),
        edges: graph
            .edges()
            .iter()
            .map(|e| JsonEdge {
                tail: graph.label(e.tail).to_string(),
                head: graph.label(e.head).to_string(),
                weight: e.weight,
            })
            .collect(),
    };
    write_json(&document, writer, options)
}

/// Export shortest-path results as JSON
pub fn export_shortest_paths_json<W: Write>(
    paths: &ShortestPaths,
    writer: W,
    options: &ExportOptions,
) -> ToolResult<()> {
    write_json(paths, writer, options)
}

fn write_json<T: Serialize, W: Write>(value: &T, mut writer: W, options: &ExportOptions) -> ToolResult<()> {
    if options.pretty_json {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::shortest_paths;
    use crate::tools::{import_from_csv_reader, import_from_json_reader, ImportOptions};

    fn setup_test_graph() -> Graph {
        let mut graph = Graph::from_edges([("A", "B", 5), ("B", "A", 2), ("A", "B", 1)]);
        graph.add_node("lonely");
        graph
    }

    #[test]
    fn test_export_csv_is_importable() {
        let graph = setup_test_graph();
        let mut buffer = Vec::new();
        let count = export_to_csv(&graph, &mut buffer).unwrap();
        assert_eq!(count, 3);

        let text = String::from_utf8(buffer.clone()).unwrap();
        assert_eq!(text, "A,B,5\nB,A,2\nA,B,1\n");

        let (reloaded, _) = import_from_csv_reader(buffer.as_slice(), &ImportOptions::default()).unwrap();
        assert_eq!(reloaded.describe(), "A: B(5) B(1)\nB: A(2)\n");
    }

    #[test]
    fn test_export_json_keeps_isolated_nodes() {
        let graph = setup_test_graph();
        let mut buffer = Vec::new();
        export_to_json(&graph, &mut buffer, &ExportOptions { pretty_json: false }).unwrap();

        let (reloaded, _) = import_from_json_reader(buffer.as_slice()).unwrap();
        assert_eq!(reloaded.describe(), graph.describe());
    }

    #[test]
    fn test_export_shortest_paths() {
        let graph = setup_test_graph();
        let paths = shortest_paths(&graph, "A").unwrap();

        let mut buffer = Vec::new();
        export_shortest_paths_json(&paths, &mut buffer, &ExportOptions::default()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["source"], "A");
        assert_eq!(value["paths"]["B"]["distance"], 1);
        assert_eq!(value["paths"]["A"]["distance"], 3);
        assert!(value["paths"]["lonely"].is_null());
    }
}
