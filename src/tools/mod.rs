/// Data import and export tools
///
/// This module provides utilities for loading graphs from edge-list files
/// and for writing graphs and query results back out.

pub mod export;
pub mod import;

pub use export::{export_shortest_paths_json, export_to_csv, export_to_json, ExportOptions};
pub use import::{
    import_from_csv, import_from_csv_reader, import_from_json, import_from_json_reader, load_graph,
    ImportOptions, ImportStats,
};

use crate::types::GraphError;
use thiserror::Error;

/// Import/export errors
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

pub type ToolResult<T> = Result<T, ToolError>;
