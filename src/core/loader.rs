//! Loading family graphs from JSON files
//!
//! The on-disk format mirrors the payload the rendering application receives
//! from its backend: a `people` lookup plus a directed `adjacency` list.
//! Adjacency entries referencing ids with no person record are tolerated;
//! such nodes simply render with their id as the label.

use crate::core::models::{AdjList, NodeLookup};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A family graph as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphFile {
    /// Person records keyed by node id
    #[serde(default)]
    pub people: NodeLookup,
    /// Directed parent → children adjacency list
    #[serde(default)]
    pub adjacency: AdjList,
}

/// Parse a family graph from a JSON file.
///
/// # Arguments
/// * `path` - Path to the graph JSON file
///
/// # Errors
/// Returns an error if the file cannot be read or is not valid graph JSON
pub fn parse_graph_json(path: &Path) -> Result<GraphFile, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read graph file '{}': {e}", path.display()))?;

    serde_json::from_str(&content)
        .map_err(|e| format!("Invalid graph JSON in '{}': {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "people": {
            "Q1": {"name": "George V", "gender": "male"},
            "Q2": {"name": "George VI", "gender": "male"},
            "Q3": {"name": "Elizabeth II", "gender": "female"}
        },
        "adjacency": {
            "Q1": ["Q2"],
            "Q2": ["Q3"]
        }
    }"#;

    #[test]
    fn parses_sample_graph() {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(SAMPLE.as_bytes()).expect("write sample");

        let graph = parse_graph_json(file.path()).expect("parse sample graph");

        assert_eq!(graph.people.len(), 3);
        assert_eq!(graph.adjacency.get("Q1"), Some(&vec!["Q2".to_string()]));
        assert_eq!(
            graph.people.get("Q3").map(|p| p.name.as_str()),
            Some("Elizabeth II")
        );
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(b"{}").expect("write empty object");

        let graph = parse_graph_json(file.path()).expect("parse empty graph");
        assert!(graph.people.is_empty());
        assert!(graph.adjacency.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = parse_graph_json(Path::new("/nonexistent/graph.json"))
            .expect_err("missing file should fail");
        assert!(err.contains("Cannot read graph file"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(b"not json").expect("write junk");

        let err = parse_graph_json(file.path()).expect_err("junk should fail");
        assert!(err.contains("Invalid graph JSON"));
    }
}
