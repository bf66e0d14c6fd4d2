//! Helper functions shared across commands

use std::fs;
use std::io::Read;

use serde_json::Value;

use trellis_core::error::Result;
use trellis_core::graph::{EdgeKey, Graph};
use trellis_core::json;

use crate::cli::OutputFormat;

/// Graph type every subcommand operates on: labels are arbitrary JSON.
pub type ValueGraph = Graph<Value, Value, Value>;

/// Load a JSON graph from a file path, or from stdin when the path is `-`.
pub fn load_graph(path: &str) -> Result<ValueGraph> {
    let text = if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };
    tracing::debug!(path, bytes = text.len(), "load_graph");
    json::from_str(&text)
}

/// Edge weight drawn from a numeric edge label, defaulting to 1.
pub fn label_weight(g: &ValueGraph) -> impl Fn(&EdgeKey) -> f64 + '_ {
    |key: &EdgeKey| g.edge_key(key).and_then(Value::as_f64).unwrap_or(1.0)
}

/// Print an ordered list of node ids, one per line or as a JSON array.
pub fn print_list(ids: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            for id in ids {
                println!("{id}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(ids)?),
    }
    Ok(())
}

/// Print node groups space-joined one per line, or as a JSON array of
/// arrays.
pub fn print_groups(groups: &[Vec<String>], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            for group in groups {
                println!("{}", group.join(" "));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(groups)?),
    }
    Ok(())
}
