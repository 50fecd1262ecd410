//! Relate command handler

use kintrace::core::{loader::parse_graph_json, relationship::calculate_relationship};
use kintrace::{error, info};
use std::path::Path;

/// Run the relate command: describe how two people are related.
pub fn run(input_file: &Path, id1: &str, id2: &str, verbose: bool) {
    match relate(input_file, id1, id2, verbose) {
        Ok(sentence) => println!("{sentence}"),
        Err(e) => {
            error!("Relationship lookup failed for {}: {e}", input_file.display());
            eprintln!("{e}");
        }
    }
}

fn relate(input_file: &Path, id1: &str, id2: &str, verbose: bool) -> Result<String, String> {
    let graph = parse_graph_json(input_file).map_err(|e| format!("✗ {e}"))?;

    if verbose {
        println!("✓ Graph loaded from {}", input_file.display());
    } else {
        info!("Graph loaded: {}", input_file.display());
    }

    let display = |id: &str| {
        graph
            .people
            .get(id)
            .map_or_else(|| id.to_string(), |p| p.name.clone())
    };

    let sentence = calculate_relationship(id1, id2, &graph.adjacency, &graph.people).map_or_else(
        || format!("{} has no close relationship with {}", display(id1), display(id2)),
        |label| format!("{} is the {label} of {}", display(id1), display(id2)),
    );

    Ok(sentence)
}
