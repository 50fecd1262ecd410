//! Data models for `Kintrace`

pub mod edge;
pub mod graph;
pub mod person;

pub use edge::{EdgeChildInfo, EdgeInfo, EdgeStyle};
pub use graph::{AdjList, NodeId, NodeLookup};
pub use person::Person;
