//! Edge styling instructions returned by the path finder

use crate::core::models::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Presentation attributes attached to a single highlighted edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    /// Stroke color (CSS color keyword or value)
    pub stroke: String,
    /// Stroke width (CSS length, e.g. "0.3em")
    pub stroke_width: String,
}

impl EdgeStyle {
    /// The fixed style applied to edges on a discovered connection path.
    #[must_use]
    pub fn highlight() -> Self {
        Self {
            stroke: "orange".to_string(),
            stroke_width: "0.3em".to_string(),
        }
    }
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self::highlight()
    }
}

/// Styling for the edges leaving a single source node, keyed by target.
pub type EdgeChildInfo = HashMap<NodeId, EdgeStyle>;

/// Styling instructions for a set of edges, keyed by source then target.
///
/// An empty map is a valid result meaning "no edges to highlight".
pub type EdgeInfo = HashMap<NodeId, EdgeChildInfo>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_style_values() {
        let style = EdgeStyle::highlight();
        assert_eq!(style.stroke, "orange");
        assert_eq!(style.stroke_width, "0.3em");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let style = EdgeStyle::highlight();
        let json = serde_json::to_string(&style).expect("serialize style");
        assert!(json.contains("\"strokeWidth\":\"0.3em\""));
        assert!(json.contains("\"stroke\":\"orange\""));
    }
}
