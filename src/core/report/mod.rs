//! Rendering output for family graphs

pub mod mermaid;

pub use mermaid::MermaidGenerator;
