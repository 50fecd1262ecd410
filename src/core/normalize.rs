//! Graph normalization for path search
//!
//! The rendered family tree is stored as a directed parent → child adjacency
//! list. Searching for a connection between two arbitrary people must walk
//! the tree in both directions, so the list is materialized once in
//! undirected form before traversal rather than re-deriving adjacency during
//! the search.

use crate::core::models::AdjList;

/// Ensure every child referenced anywhere in the list also appears as a key.
///
/// Children that are not themselves sources gain an entry with an empty
/// child list. Existing edges are untouched and the input is not mutated.
///
/// # Arguments
/// * `adj_list` - Directed parent → children adjacency list
///
/// # Returns
/// A new adjacency list where every referenced node is a key
#[must_use]
pub fn add_children_node(adj_list: &AdjList) -> AdjList {
    let mut new_adj_list = adj_list.clone();

    for children in adj_list.values() {
        for child in children {
            new_adj_list.entry(child.clone()).or_default();
        }
    }

    new_adj_list
}

/// Convert a directed adjacency list into an undirected one.
///
/// For every directed edge parent → child the reverse edge child → parent is
/// added unless it already exists, so the result is a superset of the input
/// edge set made symmetric. Applying the conversion twice yields the same
/// result as applying it once.
///
/// Existing neighbor order is preserved; reverse edges are appended while
/// walking source keys in sorted order so identical inputs always produce
/// identical neighbor lists.
///
/// # Arguments
/// * `adj_list` - Directed parent → children adjacency list
///
/// # Returns
/// A new, symmetric adjacency list suitable for undirected traversal
#[must_use]
pub fn convert_to_undirected(adj_list: &AdjList) -> AdjList {
    let mut new_adj_list = adj_list.clone();

    let mut parents: Vec<&String> = adj_list.keys().collect();
    parents.sort();

    for parent in parents {
        if let Some(children) = adj_list.get(parent) {
            for child in children {
                let reverse = new_adj_list.entry(child.clone()).or_default();
                if !reverse.contains(parent) {
                    reverse.push(parent.clone());
                }
            }
        }
    }

    new_adj_list
}
