//! Shortest connection path between two people in the rendered graph
//!
//! Runs an unweighted breadth-first search over the undirected view of the
//! family graph and returns styling instructions for the edges on the
//! discovered path. The absence of a path is a successful empty result,
//! never an error.

use crate::core::models::{AdjList, EdgeChildInfo, EdgeInfo, EdgeStyle, NodeId};
use crate::core::normalize::convert_to_undirected;
use std::collections::{HashMap, HashSet, VecDeque};

/// Find the shortest path between two nodes and style its edges for highlighting.
///
/// The directed adjacency list is converted to undirected form first, so the
/// search can walk from a child up to its parent. Edges on the discovered
/// path are mapped to the fixed highlight style (orange, 0.3em).
///
/// # Arguments
/// * `node1` - Search source
/// * `node2` - Search target
/// * `adj_list` - Directed parent → children adjacency list; not mutated
///
/// # Returns
/// Styling for each edge on the shortest path, or an empty map when either
/// endpoint is unknown, the endpoints are equal, or no path exists
#[must_use]
pub fn find_path_between_two_nodes(node1: &str, node2: &str, adj_list: &AdjList) -> EdgeInfo {
    find_path_with_style(node1, node2, adj_list, &EdgeStyle::highlight())
}

/// Same as [`find_path_between_two_nodes`] but with a caller-supplied style.
#[must_use]
pub fn find_path_with_style(
    node1: &str,
    node2: &str,
    adj_list: &AdjList,
    style: &EdgeStyle,
) -> EdgeInfo {
    let graph = convert_to_undirected(adj_list);
    find_path(node1, node2, &graph, style)
}

/// Breadth-first search from `source` toward `target` over an undirected graph.
///
/// A node is marked visited only after its neighbors have been examined;
/// a neighbor already sitting in the frontier is not enqueued a second time.
/// Both rules together keep path selection among equal-length paths
/// reproducible for identical input neighbor ordering.
fn find_path(source: &str, target: &str, graph: &AdjList, style: &EdgeStyle) -> EdgeInfo {
    if !graph.contains_key(source) || !graph.contains_key(target) {
        return EdgeInfo::new();
    }

    let mut queue: VecDeque<NodeId> = VecDeque::new();
    queue.push_back(source.to_string());

    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::new();

    while let Some(start) = queue.pop_front() {
        if start == target {
            return build_path(&start, &predecessors, style);
        }

        if let Some(neighbors) = graph.get(&start) {
            for next in neighbors {
                if visited.contains(next) {
                    continue;
                }

                if !queue.contains(next) {
                    predecessors.insert(next.clone(), start.clone());
                    queue.push_back(next.clone());
                }
            }
        }

        visited.insert(start);
    }

    EdgeInfo::new()
}

/// Reconstruct the discovered path by walking the predecessor map backward
/// from the target to the source.
///
/// Each step records one edge keyed by the predecessor, pointing at the node
/// it reached. The walk runs target → source, so entries appear in the
/// reverse of BFS discovery order; consumers treat the map as unordered.
fn build_path(target: &str, predecessors: &HashMap<NodeId, NodeId>, style: &EdgeStyle) -> EdgeInfo {
    let mut result = EdgeInfo::new();
    let mut current = target.to_string();

    while let Some(source) = predecessors.get(&current) {
        let mut child_info = EdgeChildInfo::new();
        child_info.insert(current.clone(), style.clone());
        result.insert(source.clone(), child_info);
        current.clone_from(source);
    }

    result
}
