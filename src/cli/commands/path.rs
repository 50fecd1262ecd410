//! Path command handler

use kintrace::config::Config;
use kintrace::core::{
    loader::parse_graph_json,
    models::EdgeStyle,
    normalize::add_children_node,
    path::find_path_with_style,
    report::MermaidGenerator,
};
use kintrace::{error, info};
use std::path::Path;

/// Run the path command: find and print the highlighted connection path.
///
/// # Arguments
/// * `input_file` - Path to the family graph JSON file
/// * `from` - Node id of the search source
/// * `to` - Node id of the search target
/// * `format` - Output format ("json" or "mermaid")
/// * `output_file` - Optional output path; stdout when omitted
/// * `config` - Configuration carrying the highlight style
/// * `verbose` - Whether to show progress output
pub fn run(
    input_file: &Path,
    from: &str,
    to: &str,
    format: &str,
    output_file: Option<&Path>,
    config: &Config,
    verbose: bool,
) {
    match generate(input_file, from, to, format, config, verbose) {
        Ok(rendered) => {
            if let Some(out) = output_file {
                if let Err(e) = std::fs::write(out, &rendered) {
                    error!("Failed to write {}: {e}", out.display());
                    eprintln!("✗ Failed to write {}: {e}", out.display());
                    return;
                }
                println!("✓ Output written to: {}", out.display());
            } else {
                println!("{rendered}");
            }
        }
        Err(e) => {
            error!("Path search failed for {}: {e}", input_file.display());
            eprintln!("{e}");
        }
    }
}

fn generate(
    input_file: &Path,
    from: &str,
    to: &str,
    format: &str,
    config: &Config,
    verbose: bool,
) -> Result<String, String> {
    let graph = parse_graph_json(input_file).map_err(|e| format!("✗ {e}"))?;

    if verbose {
        println!(
            "✓ Graph loaded from {} ({} people, {} adjacency entries)",
            input_file.display(),
            graph.people.len(),
            graph.adjacency.len()
        );
    } else {
        info!("Graph loaded: {}", input_file.display());
    }

    let style = highlight_style(config);
    let edges = find_path_with_style(from, to, &graph.adjacency, &style);

    if edges.is_empty() {
        eprintln!("No path found between '{from}' and '{to}'.");
    } else if verbose {
        println!("✓ Path found with {} edge(s)", edges.len());
    }

    match format {
        "json" => serde_json::to_string_pretty(&edges)
            .map_err(|e| format!("✗ Failed to serialize edge styling: {e}")),
        "mermaid" | "md" => {
            let adjacency = add_children_node(&graph.adjacency);
            Ok(MermaidGenerator::generate_graph(
                &adjacency,
                &graph.people,
                &edges,
            ))
        }
        other => Err(format!(
            "✗ Unknown format '{other}'. Supported formats: json, mermaid"
        )),
    }
}

/// Highlight style from config, falling back to the fixed default for any
/// attribute left empty.
fn highlight_style(config: &Config) -> EdgeStyle {
    let default = EdgeStyle::highlight();
    EdgeStyle {
        stroke: if config.highlight.stroke.is_empty() {
            default.stroke
        } else {
            config.highlight.stroke.clone()
        },
        stroke_width: if config.highlight.stroke_width.is_empty() {
            default.stroke_width
        } else {
            config.highlight.stroke_width.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_falls_back_to_default_style() {
        let config = Config::default();
        let style = highlight_style(&config);
        assert_eq!(style, EdgeStyle::highlight());
    }

    #[test]
    fn configured_style_wins() {
        let mut config = Config::default();
        config.highlight.stroke = "teal".to_string();
        let style = highlight_style(&config);
        assert_eq!(style.stroke, "teal");
        assert_eq!(style.stroke_width, "0.3em");
    }
}
