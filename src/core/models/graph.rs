//! Adjacency-list representation of a rendered family-tree subgraph

use crate::core::models::Person;
use std::collections::HashMap;

/// Opaque identifier for a person in the graph (e.g., a Wikidata QID like "Q9682").
pub type NodeId = String;

/// Directed adjacency list mapping each parent to the children it points to.
///
/// Keys are unique. A node absent as a key either has no outgoing edges or is
/// unknown to the graph; both are treated as "no neighbors" during traversal.
pub type AdjList = HashMap<NodeId, Vec<NodeId>>;

/// Lookup from node id to the person's display data.
pub type NodeLookup = HashMap<NodeId, Person>;
