//! Mermaid diagram generator for family graphs
//!
//! Generates Mermaid flowchart syntax that can be embedded in Markdown files
//! and rendered by GitHub, GitLab, and other Markdown viewers. Edges on a
//! highlighted connection path receive `linkStyle` directives carrying the
//! path finder's stroke attributes.

use crate::core::models::{AdjList, EdgeInfo, NodeLookup};
use std::fmt::Write;

/// Generator for Mermaid diagram syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Generate a Mermaid flowchart from a family graph.
    ///
    /// Creates a top-down flowchart of parent → child edges. Each node shows
    /// the person's name when a record exists, otherwise the raw id. Edges
    /// present in `highlight` (in either orientation, since path
    /// reconstruction may record an edge against its stored direction) gain
    /// a `linkStyle` line with the highlight's stroke attributes.
    ///
    /// Output is deterministic: source nodes are emitted in sorted order and
    /// child order is preserved from the input.
    #[must_use]
    pub fn generate_graph(adj_list: &AdjList, lookup: &NodeLookup, highlight: &EdgeInfo) -> String {
        let mut output = String::from("```mermaid\nflowchart TD\n");

        let mut sources: Vec<&String> = adj_list.keys().collect();
        sources.sort();

        // Define nodes (sources first, then children without own entries)
        let mut declared: Vec<&String> = sources.clone();
        for &source in &sources {
            if let Some(children) = adj_list.get(source) {
                for child in children {
                    if !declared.contains(&child) {
                        declared.push(child);
                    }
                }
            }
        }
        for node in declared {
            let label = Self::get_node_label(node, lookup);
            let safe_id = Self::sanitize_id(node);
            let _ = writeln!(output, "    {safe_id}[\"{label}\"]");
        }

        output.push('\n');

        // Add edges, collecting link indices for highlighted ones
        let mut link_index = 0usize;
        let mut styled_links: Vec<(usize, String)> = Vec::new();

        for &source in &sources {
            if let Some(children) = adj_list.get(source) {
                let source_id = Self::sanitize_id(source);
                for child in children {
                    let child_id = Self::sanitize_id(child);
                    let _ = writeln!(output, "    {source_id} --> {child_id}");

                    if let Some(style) = Self::highlight_style(highlight, source, child) {
                        styled_links.push((link_index, style));
                    }
                    link_index += 1;
                }
            }
        }

        if !styled_links.is_empty() {
            output.push('\n');
            for (index, style) in styled_links {
                let _ = writeln!(output, "    linkStyle {index} {style}");
            }
        }

        output.push_str("```\n");
        output
    }

    /// Look an edge up in the highlight map, in either orientation.
    fn highlight_style(highlight: &EdgeInfo, source: &str, child: &str) -> Option<String> {
        let style = highlight
            .get(source)
            .and_then(|targets| targets.get(child))
            .or_else(|| highlight.get(child).and_then(|targets| targets.get(source)))?;

        Some(format!(
            "stroke:{},stroke-width:{}",
            style.stroke, style.stroke_width
        ))
    }

    /// Get a display label for a person node
    fn get_node_label(node: &str, lookup: &NodeLookup) -> String {
        lookup.get(node).map_or_else(
            || node.to_string(),
            |person| {
                // Truncate long names on character boundaries; byte slicing
                // would panic on multibyte names
                if person.name.chars().count() > 30 {
                    let short: String = person.name.chars().take(27).collect();
                    format!("{short}...")
                } else {
                    person.name.clone()
                }
            },
        )
    }

    /// Sanitize a node id for use as a Mermaid node ID
    fn sanitize_id(key: &str) -> String {
        key.chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect()
    }
}
